//! Guard wrapper applied to protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once per navigation to a protected page, before any of the
//! page's content is constructed. The decision itself is pure
//! (`util::guard::decide`); this component re-reads storage so the
//! decision always sees the live session, then either renders the children
//! or issues a history-replacing redirect while rendering nothing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Role, SessionSnapshot};
use crate::util::guard::{self, GuardOutcome};
use crate::util::session_store;

/// Wrap a protected page. An empty `roles` slice admits any authenticated
/// session; otherwise the session role must be a member of the slice.
#[component]
pub fn Protected(
    #[prop(optional)] roles: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();
    // Sync from storage on every mount: the session can change between
    // navigations without this component's ancestors re-rendering.
    session.set(session_store::load());

    let outcome = Memo::new(move |_| guard::decide(&session.get(), roles));

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(target) = guard::redirect_target(outcome.get()) {
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show when=move || outcome.get() == GuardOutcome::Allow>
            {children()}
        </Show>
    }
}
