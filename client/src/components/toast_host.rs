//! Renders the toast queue and schedules auto-dismissal.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays on screen.
#[cfg(feature = "hydrate")]
const DISMISS_AFTER_MS: u64 = 4_000;

fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
        ToastKind::Info => "toast toast--info",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Schedule a dismissal for every toast that enters the queue.
    #[cfg(feature = "hydrate")]
    {
        let mut scheduled_past: u64 = 0;
        let mut scheduled = move || {
            let live = toasts.get();
            for toast in &live.toasts {
                if toast.id >= scheduled_past {
                    scheduled_past = toast.id + 1;
                    let id = toast.id;
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            DISMISS_AFTER_MS,
                        ))
                        .await;
                        toasts.update(|state| state.dismiss(id));
                    });
                }
            }
        };
        Effect::new(move || scheduled());
    }

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = kind_class(toast.kind);
                        let id = toast.id;
                        view! {
                            <div class=class>
                                <strong class="toast__title">{toast.title}</strong>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
