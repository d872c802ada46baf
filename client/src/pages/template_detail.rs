//! Detail page for one marketplace template.

#[cfg(test)]
#[path = "template_detail_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::data::templates::{self, Category};
use crate::state::toast::{ToastKind, ToastState};

/// Builder a template's category feeds into. Proposal and contract
/// templates start from the AI writer since they have no dedicated builder.
pub(crate) fn builder_path(category: Category) -> &'static str {
    match category {
        Category::Resume => "/resume-builder",
        Category::Invoice => "/invoice-builder",
        Category::Letter => "/letter-builder",
        Category::Proposal | Category::Contract => "/ai-writer",
    }
}

#[component]
pub fn TemplateDetailPage() -> impl IntoView {
    let params = use_params_map();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let template = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|id| templates::find(&id))
    });

    view! {
        <div class="template-detail">
            {move || match template.get() {
                Some(template) => {
                    let name = template.name;
                    let on_download = move |_| {
                        toasts
                            .update(|state| {
                                state
                                    .push(
                                        ToastKind::Success,
                                        "Download Started",
                                        &format!("{name} is being prepared."),
                                    );
                            });
                    };
                    view! {
                        <article class="template-detail__body">
                            <header class="template-detail__header">
                                <span class="badge">{template.category.label()}</span>
                                <h1>{template.name}</h1>
                                <p class="template-detail__creator">
                                    {"by "}{template.creator_name}
                                </p>
                            </header>

                            <p class="template-detail__description">{template.description}</p>

                            <div class="template-detail__stats">
                                <span>
                                    {format!(
                                        "★ {:.1} ({} ratings)",
                                        template.average_rating,
                                        template.number_of_ratings,
                                    )}
                                </span>
                                <span>{format!("{} downloads", template.downloads)}</span>
                            </div>

                            <div class="template-detail__tags">
                                {template
                                    .tags
                                    .iter()
                                    .map(|tag| view! { <span class="tag">{*tag}</span> })
                                    .collect::<Vec<_>>()}
                            </div>

                            <div class="template-detail__actions">
                                <a href=builder_path(template.category) class="btn btn--primary">
                                    "Use This Template"
                                </a>
                                <button class="btn btn--outline" on:click=on_download>
                                    "Download"
                                </button>
                            </div>
                        </article>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div class="template-detail__missing">
                            <h1>"Template not found"</h1>
                            <p>"The template you are looking for does not exist or was removed."</p>
                            <a href="/templates" class="btn btn--primary">
                                "Back to Templates"
                            </a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
