//! Contact page with a simple message form.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};
use crate::util::validate;

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !validate::is_valid_email(email.get().trim()) {
            error.set(Some("Invalid email address."));
            return;
        }
        if message.get().trim().is_empty() {
            error.set(Some("Please enter a message."));
            return;
        }
        error.set(None);
        toasts.update(|state| {
            state.push(
                ToastKind::Success,
                "Message Sent",
                "Thanks for reaching out! We'll reply to your email soon.",
            );
        });
        email.set(String::new());
        message.set(String::new());
    };

    view! {
        <div class="static-page">
            <h1>"Contact Us"</h1>
            <p>"Questions, feedback, or template ideas? Send us a note."</p>

            <form class="login-form contact-form" on:submit=on_submit>
                <label>
                    "Your Email"
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Message"
                    <textarea
                        class="builder__textarea"
                        placeholder="What's on your mind?"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="field-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit">
                    "Send Message"
                </button>
            </form>
        </div>
    }
}
