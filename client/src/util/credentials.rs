//! Demo credential pairs and the login-time credential check.
//!
//! There is no account database: exactly two credential pairs exist, one
//! per selectable role tab. The check compares against the pair for the
//! selected tab only, so user credentials on the creator tab must fail.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;

use uuid::Uuid;

use crate::state::session::Role;

/// A hardcoded demo account.
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    /// Role-derived label written as the session display name.
    pub display_name: &'static str,
}

/// The demo account behind the "User" tab.
pub const DEMO_USER: DemoAccount = DemoAccount {
    email: "user@docai.app",
    password: "userpass123",
    display_name: "Demo User",
};

/// The demo account behind the "Creator" tab.
pub const DEMO_CREATOR: DemoAccount = DemoAccount {
    email: "creator@docai.app",
    password: "creatorpass123",
    display_name: "Demo Creator",
};

/// The account for a login tab, if one exists. Admin has no pair and can
/// never be logged into.
pub fn account_for(role: Role) -> Option<&'static DemoAccount> {
    match role {
        Role::User => Some(&DEMO_USER),
        Role::Creator => Some(&DEMO_CREATOR),
        Role::Admin => None,
    }
}

/// Compare submitted credentials against the selected tab's pair.
pub fn check(role: Role, email: &str, password: &str) -> bool {
    account_for(role).is_some_and(|account| account.email == email && account.password == password)
}

/// Mint an opaque session token. Uniqueness across sessions is incidental;
/// nothing on the other side verifies it.
pub fn mint_token() -> String {
    format!("mock-jwt-token-{}", Uuid::new_v4())
}
