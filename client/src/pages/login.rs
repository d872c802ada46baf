//! Login page with user/creator tabs and the demo credential check.
//!
//! Structural validation runs first and reports per-field; only clean
//! input reaches the credential comparison. A mismatch surfaces one
//! generic notification so nothing leaks about which half was wrong.

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{NewSession, Role, SessionSnapshot};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::credentials;
use crate::util::session_store;
use crate::util::validate::{self, LoginErrors};

/// Why a login submission did not establish a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum LoginFailure {
    /// Structural problems, reported per-field. The credential pair was
    /// never consulted.
    Invalid(LoginErrors),
    /// Well-formed input that does not match the selected tab's pair.
    BadCredentials,
}

/// Full login decision for one submission. On success the returned session
/// is ready to write: minted token, the selected role, a role-derived
/// display name, and the submitted email.
pub(crate) fn attempt_login(
    role: Role,
    email: &str,
    password: &str,
) -> Result<NewSession, LoginFailure> {
    let errors = validate::validate_login(email, password);
    if !errors.is_empty() {
        return Err(LoginFailure::Invalid(errors));
    }
    if !credentials::check(role, email, password) {
        return Err(LoginFailure::BadCredentials);
    }
    let display_name = credentials::account_for(role)
        .map(|account| account.display_name)
        .unwrap_or_default();
    Ok(NewSession {
        token: credentials::mint_token(),
        role,
        display_name: display_name.to_owned(),
        email: email.to_owned(),
    })
}

/// Where a fresh login lands, by role.
pub(crate) fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Creator => "/creator-dashboard",
        Role::User | Role::Admin => "/dashboard",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let selected_role = RwSignal::new(Role::User);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let role = selected_role.get();
        match attempt_login(role, email.get().trim(), &password.get()) {
            Ok(new_session) => {
                session_store::establish(&new_session);
                session.set(session_store::load());
                navigate(landing_path(role), NavigateOptions::default());
            }
            Err(LoginFailure::Invalid(field_errors)) => errors.set(field_errors),
            Err(LoginFailure::BadCredentials) => {
                errors.set(LoginErrors::default());
                toasts.update(|state| {
                    state.push(
                        ToastKind::Error,
                        "Sign in failed",
                        "Invalid credentials. Please try again.",
                    );
                });
            }
        }
    };

    let tab_class = move |role: Role| {
        if selected_role.get() == role {
            "login-tabs__tab login-tabs__tab--active"
        } else {
            "login-tabs__tab"
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__brand">"DocAi"</h1>
                <h2>"Welcome Back"</h2>
                <p class="login-card__subtitle">"Sign in to your account"</p>

                <div class="login-tabs">
                    <button
                        class=move || tab_class(Role::User)
                        on:click=move |_| selected_role.set(Role::User)
                    >
                        "User"
                    </button>
                    <button
                        class=move || tab_class(Role::Creator)
                        on:click=move |_| selected_role.set(Role::Creator)
                    >
                        "Creator"
                    </button>
                </div>

                <p class="login-tabs__blurb">
                    {move || {
                        if selected_role.get() == Role::Creator {
                            "Upload templates, earn money, and access analytics"
                        } else {
                            "Access templates, AI writer, and document builders"
                        }
                    }}
                </p>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || errors.get().email.is_some()>
                        <p class="field-error">{move || errors.get().email.unwrap_or_default()}</p>
                    </Show>

                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || errors.get().password.is_some()>
                        <p class="field-error">
                            {move || errors.get().password.unwrap_or_default()}
                        </p>
                    </Show>

                    <button class="btn btn--primary login-button" type="submit">
                        {move || {
                            if selected_role.get() == Role::Creator {
                                "Sign In as Creator"
                            } else {
                                "Sign In"
                            }
                        }}
                    </button>
                </form>

                <p class="login-card__footer">
                    "Don't have an account? "
                    <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
