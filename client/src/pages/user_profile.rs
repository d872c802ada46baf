//! Account profile page showing the current session's identity.

use leptos::prelude::*;

use crate::state::session::SessionSnapshot;

#[component]
pub fn UserProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();

    let display_name =
        move || session.get().display_name().unwrap_or("Unknown").to_owned();
    let email = move || session.get().email().unwrap_or("Not set").to_owned();
    let role_label = move || {
        session
            .get()
            .role()
            .map_or("None", |role| role.as_str())
            .to_owned()
    };

    view! {
        <div class="profile-page">
            <h1>"My Profile"</h1>
            <div class="profile-card">
                <div class="profile-card__row">
                    <span class="profile-card__label">"Display Name"</span>
                    <span>{display_name}</span>
                </div>
                <div class="profile-card__row">
                    <span class="profile-card__label">"Email"</span>
                    <span>{email}</span>
                </div>
                <div class="profile-card__row">
                    <span class="profile-card__label">"Account Type"</span>
                    <span class="badge">{role_label}</span>
                </div>
            </div>
            <p class="profile-page__note">
                "Account details are fixed for demo accounts. Sign out and register to change them."
            </p>
        </div>
    }
}
