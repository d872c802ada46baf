//! Top navigation bar with role-aware links and the account menu.
//!
//! Strictly derived display: the bar decides nothing about access, it only
//! reflects the session. The session signal is re-read from storage on
//! every route change because a login or logout elsewhere (another tab,
//! the logout button itself) does not remount this component.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::SessionSnapshot;
use crate::util::session_store;

/// Dashboard link target for the current session: creators get the creator
/// dashboard, everyone else the user dashboard.
pub(crate) fn dashboard_path(session: &SessionSnapshot) -> &'static str {
    if session.is_creator() {
        "/creator-dashboard"
    } else {
        "/dashboard"
    }
}

/// Primary nav links for the current session.
pub(crate) fn nav_links(session: &SessionSnapshot) -> Vec<(&'static str, &'static str)> {
    vec![
        ("Home", "/"),
        ("Templates", "/templates"),
        ("AI Writer", "/ai-writer"),
        ("Dashboard", dashboard_path(session)),
        ("About", "/about"),
        ("Contact", "/contact"),
    ]
}

#[component]
pub fn Navigation() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    // Refresh the session snapshot whenever the route changes.
    Effect::new(move || {
        let _ = pathname.get();
        session.set(session_store::load());
        menu_open.set(false);
    });

    let on_logout = move |_| {
        // Reset local state immediately; the full-page navigation that
        // logout() performs lands afterwards.
        session_store::logout();
        session.set(SessionSnapshot::default());
    };

    let links = move || {
        let current = pathname.get();
        nav_links(&session.get())
            .into_iter()
            .map(|(name, path)| {
                let class = if current == path {
                    "nav__link nav__link--active"
                } else {
                    "nav__link"
                };
                view! {
                    <a href=path class=class>
                        {name}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <a href="/" class="nav__brand">
                    "DocAi"
                </a>

                <div class="nav__links">{links}</div>

                <div class="nav__account">
                    <Show
                        when=move || session.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <a href="/login" class="btn btn--outline">
                                    "Login"
                                </a>
                            }
                        }
                    >
                        <span class="nav__user">
                            {move || {
                                session.get().display_name().unwrap_or("Account").to_owned()
                            }}
                        </span>
                        <button class="btn btn--ghost" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </div>

                <button
                    class="nav__menu-toggle"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "Menu"
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav__mobile">{links}</div>
            </Show>
        </nav>
    }
}
