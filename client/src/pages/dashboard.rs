//! User dashboard: greeting, usage stats, recent documents, quick actions.
//!
//! All figures are in-memory mock data; the page exists to exercise the
//! session accessors (greeting name, creator promo) and the guard.

use leptos::prelude::*;

use crate::state::session::SessionSnapshot;
use crate::state::toast::{ToastKind, ToastState};

/// One mock document row.
struct UserDocument {
    name: &'static str,
    kind: &'static str,
    last_modified: &'static str,
    status: &'static str,
}

fn recent_documents() -> Vec<UserDocument> {
    vec![
        UserDocument {
            name: "My Q3 Resume Update",
            kind: "Resume",
            last_modified: "May 20, 2024",
            status: "Draft",
        },
        UserDocument {
            name: "Invoice #1024 - Client X",
            kind: "Invoice",
            last_modified: "May 18, 2024",
            status: "Completed",
        },
        UserDocument {
            name: "Cover Letter - Acme Corp",
            kind: "Letter",
            last_modified: "May 15, 2024",
            status: "In Review",
        },
        UserDocument {
            name: "Project Proposal - New App",
            kind: "Proposal",
            last_modified: "May 22, 2024",
            status: "Draft",
        },
        UserDocument {
            name: "Service Agreement V2",
            kind: "Contract",
            last_modified: "May 10, 2024",
            status: "Completed",
        },
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let greeting_name =
        move || session.get().display_name().unwrap_or("User").to_owned();
    let show_creator_promo = move || !session.get().is_creator();

    let stats = [
        ("Documents Created", "5"),
        ("Templates Used", "3"),
        ("Active Drafts", "2"),
        ("Hours Saved", "12h"),
    ];

    let quick_actions = [
        (
            "Create New Document",
            "Start fresh with a new document using our AI tools.",
            "/ai-writer",
        ),
        (
            "Browse Templates",
            "Explore professionally designed templates.",
            "/templates",
        ),
        (
            "View My Profile",
            "Manage your account settings and details.",
            "/profile",
        ),
    ];

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || format!("Welcome back, {}!", greeting_name())}</h1>
                <p class="dashboard-page__tagline">
                    "\"The best way to predict the future is to create it.\" - Peter Drucker"
                </p>
            </header>

            <div class="stat-grid">
                {stats
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat-card">
                                <div class="stat-card__value">{value}</div>
                                <div class="stat-card__label">{label}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="dashboard-page__columns">
                <section class="dashboard-page__main">
                    <h2>"Quick Actions"</h2>
                    <div class="action-list">
                        {quick_actions
                            .into_iter()
                            .map(|(title, description, href)| {
                                view! {
                                    <a href=href class="action-card">
                                        <h3>{title}</h3>
                                        <p>{description}</p>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <h2>"Recent Documents"</h2>
                    <ul class="document-list">
                        {recent_documents()
                            .into_iter()
                            .map(|doc| {
                                let name = doc.name;
                                view! {
                                    <li class="document-list__row">
                                        <span class="document-list__name">{doc.name}</span>
                                        <span class="badge">{doc.kind}</span>
                                        <span class="document-list__date">{doc.last_modified}</span>
                                        <span class="badge badge--status">{doc.status}</span>
                                        <button
                                            class="btn btn--ghost"
                                            on:click=move |_| {
                                                toasts
                                                    .update(|state| {
                                                        state
                                                            .push(
                                                                ToastKind::Info,
                                                                "Opening Document",
                                                                &format!("Attempting to open {name}."),
                                                            );
                                                    });
                                            }
                                        >
                                            "Open"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>

                <aside class="dashboard-page__aside">
                    <Show when=show_creator_promo>
                        <div class="promo-card">
                            <h3>"Become a Creator"</h3>
                            <p>
                                "Publish your own templates to the marketplace and earn on every download."
                            </p>
                            <a href="/become-creator" class="btn btn--primary">
                                "Learn More"
                            </a>
                        </div>
                    </Show>
                </aside>
            </div>
        </div>
    }
}
