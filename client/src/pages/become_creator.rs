//! Become-a-creator pitch page with the application form.
//!
//! The application is accepted unconditionally (there is no review queue
//! behind it); a toast confirms submission and the form resets.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

#[component]
pub fn BecomeCreatorPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let portfolio = RwSignal::new(String::new());
    let motivation = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() || motivation.get().trim().is_empty() {
            error.set(Some("Please fill in your name and motivation."));
            return;
        }
        error.set(None);
        toasts.update(|state| {
            state.push(
                ToastKind::Success,
                "Application Received",
                "Thanks! We'll review your application and get back to you.",
            );
        });
        name.set(String::new());
        portfolio.set(String::new());
        motivation.set(String::new());
    };

    view! {
        <div class="become-creator">
            <section class="become-creator__pitch">
                <h1>"Become a Creator"</h1>
                <p>
                    "Turn your design skills into income. Publish templates to the DocAi marketplace and earn on every download."
                </p>
                <ul class="become-creator__perks">
                    <li>"Keep 70% of every sale"</li>
                    <li>"Analytics on downloads and ratings"</li>
                    <li>"Featured placement for top-rated templates"</li>
                </ul>
            </section>

            <section class="become-creator__form">
                <h2>"Apply Now"</h2>
                <form class="login-form" on:submit=on_submit>
                    <label>
                        "Name"
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Portfolio URL (optional)"
                        <input
                            class="login-input"
                            type="url"
                            placeholder="https://..."
                            prop:value=move || portfolio.get()
                            on:input=move |ev| portfolio.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Why do you want to join?"
                        <textarea
                            class="builder__textarea"
                            placeholder="Tell us about the templates you'd like to publish..."
                            prop:value=move || motivation.get()
                            on:input=move |ev| motivation.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="field-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit">
                        "Submit Application"
                    </button>
                </form>
            </section>
        </div>
    }
}
