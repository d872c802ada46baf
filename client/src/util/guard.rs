//! Route-guard decision procedure.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page consults this decision before rendering content.
//! The decision is pure over a session snapshot; the navigation side effect
//! lives in the `Protected` wrapper component so route components share
//! identical redirect behavior.

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use crate::state::session::{Role, SessionSnapshot};

/// Terminal outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the protected content unchanged.
    Allow,
    /// Unauthenticated: history-replacing redirect to `/login`.
    RedirectToLogin,
    /// Authenticated but role not in the route's allowed set:
    /// history-replacing redirect to the homepage.
    RedirectToHome,
}

/// Decide whether the current session may see a route.
///
/// An empty `allowed` set means the route requires authentication but no
/// particular role. A session whose stored role fails to parse counts as
/// role-less and is bounced home from role-restricted routes.
pub fn decide(session: &SessionSnapshot, allowed: &[Role]) -> GuardOutcome {
    if !session.is_authenticated() {
        return GuardOutcome::RedirectToLogin;
    }
    if !allowed.is_empty() {
        match session.role() {
            Some(role) if allowed.contains(&role) => {}
            _ => return GuardOutcome::RedirectToHome,
        }
    }
    GuardOutcome::Allow
}

/// Redirect target for a non-`Allow` outcome.
pub fn redirect_target(outcome: GuardOutcome) -> Option<&'static str> {
    match outcome {
        GuardOutcome::Allow => None,
        GuardOutcome::RedirectToLogin => Some("/login"),
        GuardOutcome::RedirectToHome => Some("/"),
    }
}
