//! Card for one marketplace template in the browse grid.

use leptos::prelude::*;

use crate::data::templates::Template;

#[component]
pub fn TemplateCard(template: Template) -> impl IntoView {
    let detail_href = format!("/templates/{}", template.id);
    let rating = format!("{:.1}", template.average_rating);
    let ratings_count = format!("({})", template.number_of_ratings);
    let downloads = format!("{} downloads", template.downloads);

    view! {
        <a href=detail_href class="template-card">
            <div class="template-card__preview">
                <span class="template-card__category">{template.category.label()}</span>
            </div>
            <div class="template-card__body">
                <h3 class="template-card__name">{template.name}</h3>
                <p class="template-card__description">{template.description}</p>
                <div class="template-card__meta">
                    <span class="template-card__creator">{"by "}{template.creator_name}</span>
                    <span class="template-card__rating">
                        {"★ "}{rating}" "<span class="template-card__count">{ratings_count}</span>
                    </span>
                </div>
                <div class="template-card__footer">
                    <span>{downloads}</span>
                    <span class="template-card__tags">
                        {template
                            .tags
                            .iter()
                            .map(|tag| view! { <span class="tag">{*tag}</span> })
                            .collect::<Vec<_>>()}
                    </span>
                </div>
            </div>
        </a>
    }
}
