//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <span class="footer__brand">"DocAi"</span>
                <div class="footer__links">
                    <a href="/templates">"Templates"</a>
                    <a href="/ai-writer">"AI Writer"</a>
                    <a href="/about">"About"</a>
                    <a href="/contact">"Contact"</a>
                </div>
                <span class="footer__note">"Create professional documents in minutes."</span>
            </div>
        </footer>
    }
}
