//! Creator dashboard: marketplace stats and the creator's template list.
//!
//! Reachable only through the creator-role guard; everything shown is
//! in-memory mock data.

use leptos::prelude::*;

use crate::state::session::SessionSnapshot;
use crate::state::toast::{ToastKind, ToastState};

struct CreatorTemplate {
    name: &'static str,
    category: &'static str,
    downloads: u32,
    rating: f64,
    earnings: &'static str,
}

fn my_templates() -> Vec<CreatorTemplate> {
    vec![
        CreatorTemplate {
            name: "Modern Professional Resume",
            category: "Resume",
            downloads: 12840,
            rating: 4.8,
            earnings: "$642.00",
        },
        CreatorTemplate {
            name: "Freelancer Invoice",
            category: "Invoice",
            downloads: 7225,
            rating: 4.7,
            earnings: "$361.25",
        },
        CreatorTemplate {
            name: "Minimalist Cover Letter",
            category: "Letter",
            downloads: 1910,
            rating: 4.1,
            earnings: "$95.50",
        },
    ]
}

#[component]
pub fn CreatorDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let greeting_name =
        move || session.get().display_name().unwrap_or("Creator").to_owned();

    let stats = [
        ("Published Templates", "3"),
        ("Total Downloads", "21,975"),
        ("Total Earnings", "$1,098.75"),
        ("Average Rating", "4.5"),
    ];

    let on_upload = move |_| {
        toasts.update(|state| {
            state.push(
                ToastKind::Info,
                "Coming Soon",
                "Template upload is not available in the demo.",
            );
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || format!("Creator Studio: {}", greeting_name())}</h1>
                <button class="btn btn--primary" on:click=on_upload>
                    "+ Upload Template"
                </button>
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

            <h2>"My Templates"</h2>
            <ul class="document-list">
                {my_templates()
                    .into_iter()
                    .map(|template| {
                        view! {
                            <li class="document-list__row">
                                <span class="document-list__name">{template.name}</span>
                                <span class="badge">{template.category}</span>
                                <span>{format!("{} downloads", template.downloads)}</span>
                                <span>{format!("★ {:.1}", template.rating)}</span>
                                <span class="document-list__earnings">{template.earnings}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
