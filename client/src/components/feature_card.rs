//! Marketing card used on the homepage feature grid.

use leptos::prelude::*;

#[component]
pub fn FeatureCard(
    title: &'static str,
    description: &'static str,
    href: &'static str,
) -> impl IntoView {
    view! {
        <a href=href class="feature-card">
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__description">{description}</p>
        </a>
    }
}
