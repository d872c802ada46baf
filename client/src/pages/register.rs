//! Registration page.
//!
//! There is no account database, so a structurally valid submission always
//! succeeds: the session is written with the `user` role and the browser
//! is sent back to the login screen after a short delay so the success
//! notification can be seen.

#[cfg(test)]
#[path = "register_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{NewSession, Role, SessionSnapshot};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::credentials;
use crate::util::session_store;
use crate::util::validate::{self, RegisterErrors};

/// Delay before leaving for the login screen, long enough for the success
/// toast to register.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY_MS: u64 = 1_500;

/// Session written for a fresh registration: role is always `user`, the
/// display name is the chosen username.
pub(crate) fn registration_session(username: &str, email: &str) -> NewSession {
    NewSession {
        token: credentials::mint_token(),
        role: Role::User,
        display_name: username.to_owned(),
        email: email.to_owned(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(RegisterErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = username.get().trim().to_owned();
        let address = email.get().trim().to_owned();
        let field_errors =
            validate::validate_register(&name, &address, &password.get(), &confirm_password.get());
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(RegisterErrors::default());

        let new_session = registration_session(&name, &address);
        session_store::establish(&new_session);
        session.set(session_store::load());

        toasts.update(|state| {
            state.push(
                ToastKind::Success,
                "Registration Successful!",
                &format!("Welcome, {name}! Your account has been created."),
            );
        });

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(REDIRECT_DELAY_MS))
                    .await;
                navigate("/login", leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        navigate("/login", leptos_router::NavigateOptions::default());
    };

    let field = move |label: &'static str,
                      input_type: &'static str,
                      placeholder: &'static str,
                      value: RwSignal<String>,
                      error: Memo<Option<&'static str>>| {
        view! {
            <label class="register-form__label">
                {label}
                <input
                    class="login-input"
                    type=input_type
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="field-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        }
    };

    let username_error = Memo::new(move |_| errors.get().username);
    let email_error = Memo::new(move |_| errors.get().email);
    let password_error = Memo::new(move |_| errors.get().password);
    let confirm_error = Memo::new(move |_| errors.get().confirm_password);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Create Your Account"</h2>
                <p class="login-card__subtitle">"Enter your details below to register."</p>

                <form class="login-form" on:submit=on_submit>
                    {field("Username", "text", "YourUsername", username, username_error)}
                    {field("Email", "email", "you@example.com", email, email_error)}
                    {field("Password", "password", "........", password, password_error)}
                    {field(
                        "Confirm Password",
                        "password",
                        "........",
                        confirm_password,
                        confirm_error,
                    )}
                    <button class="btn btn--primary login-button" type="submit">
                        "Create Account"
                    </button>
                </form>

                <p class="login-card__footer">
                    "Already have an account? "
                    <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
