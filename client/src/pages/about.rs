//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="static-page">
            <h1>"About DocAi"</h1>
            <p>
                "DocAi helps people produce professional documents without fighting a word processor. Builders for resumes, invoices, and letters pair with a marketplace of community templates and an AI assistant for first drafts."
            </p>
            <p>
                "The platform is built by a small team that believes paperwork should take minutes, not evenings. Creators keep the majority of every sale, and users keep ownership of everything they make."
            </p>
        </div>
    }
}
