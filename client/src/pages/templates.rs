//! Marketplace browse page: search, category filter, and sorting over the
//! in-memory catalog.

use leptos::prelude::*;

use crate::components::template_card::TemplateCard;
use crate::data::templates::{self, Category, SortKey};

#[component]
pub fn TemplatesPage() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(None::<Category>);
    let sort_key = RwSignal::new(SortKey::default());

    let filtered = Memo::new(move |_| {
        let catalog = templates::catalog();
        let mut hits = templates::filter_templates(&catalog, &search.get(), category.get());
        templates::sort_templates(&mut hits, sort_key.get());
        hits
    });

    let heading = move || {
        let count = filtered.get().len();
        match category.get() {
            Some(c) => format!("{} Templates ({count} results)", c.label()),
            None => format!("All Templates ({count} results)"),
        }
    };

    view! {
        <div class="templates-page">
            <header class="templates-page__header">
                <h1>"Explore Our Templates"</h1>
                <p>
                    "Discover professional templates created by our community of talented creators"
                </p>
            </header>

            <div class="templates-page__controls">
                <input
                    class="templates-page__search"
                    type="search"
                    placeholder="Search templates by name, description, or tag..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />

                <select
                    class="templates-page__select"
                    on:change=move |ev| category.set(Category::parse(&event_target_value(&ev)))
                >
                    <option value="all">"All Categories"</option>
                    {Category::ALL
                        .into_iter()
                        .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>

                <select
                    class="templates-page__select"
                    on:change=move |ev| {
                        sort_key.set(SortKey::parse(&event_target_value(&ev)).unwrap_or_default());
                    }
                >
                    <option value="popularity_desc">"Popularity (High to Low)"</option>
                    <option value="popularity_asc">"Popularity (Low to High)"</option>
                    <option value="rating_desc">"Rating (High to Low)"</option>
                    <option value="rating_asc">"Rating (Low to High)"</option>
                    <option value="name_asc">"Name (A-Z)"</option>
                    <option value="name_desc">"Name (Z-A)"</option>
                </select>
            </div>

            <h2 class="templates-page__count">{heading}</h2>

            <div class="templates-page__grid">
                {move || {
                    let hits = filtered.get();
                    if hits.is_empty() {
                        view! {
                            <p class="templates-page__empty">
                                "No templates match your search. Try a different term or category."
                            </p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="templates-page__cards">
                                {hits
                                    .into_iter()
                                    .map(|template| view! { <TemplateCard template=template/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
