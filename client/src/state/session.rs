//! Session model for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is five string fields persisted in browser storage. Every
//! auth decision in the app (route guards, navigation chrome, profile
//! pages) goes through the accessors here, which resolve missing or
//! malformed fields to `None`/`false` rather than erroring. Undefined
//! state must never read as "authenticated".

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

/// Storage key for the opaque auth token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the authenticated flag (exact literal `"true"`).
pub const AUTHENTICATED_KEY: &str = "isAuthenticated";
/// Storage key for the account role.
pub const ROLE_KEY: &str = "userType";
/// Storage key for the display name.
pub const DISPLAY_NAME_KEY: &str = "userName";
/// Storage key for the account email.
pub const EMAIL_KEY: &str = "userEmail";

/// All five session keys, in write order.
pub const SESSION_KEYS: [&str; 5] = [
    TOKEN_KEY,
    AUTHENTICATED_KEY,
    ROLE_KEY,
    DISPLAY_NAME_KEY,
    EMAIL_KEY,
];

/// Access tier associated with a session, fixed at login/registration time.
///
/// Stored as a plain string; parsing happens at the read boundary so an
/// unrecognized value behaves like no role at all instead of leaking an
/// arbitrary string into role comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Creator,
    Admin,
}

impl Role {
    /// Parse a stored role string. Unknown values are `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Self::User),
            "creator" => Some(Self::Creator),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// The string form written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Creator => "creator",
            Self::Admin => "admin",
        }
    }
}

/// Raw snapshot of the five session fields as read from storage.
///
/// Fields hold whatever strings storage held, absent fields as `None`.
/// Interpretation lives entirely in the accessor methods.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub authenticated: Option<String>,
    pub role: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl SessionSnapshot {
    /// True iff the authenticated flag is exactly `"true"` AND a non-empty
    /// token exists. Either alone is insufficient; the double-check guards
    /// against partially written or corrupted storage.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.as_deref() == Some("true")
            && self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// The session role, or `None` when unauthenticated or when the stored
    /// string is not a recognized role.
    pub fn role(&self) -> Option<Role> {
        if !self.is_authenticated() {
            return None;
        }
        self.role.as_deref().and_then(Role::parse)
    }

    pub fn is_user(&self) -> bool {
        self.role() == Some(Role::User)
    }

    pub fn is_creator(&self) -> bool {
        self.role() == Some(Role::Creator)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    /// Display name, or `None` unless authenticated.
    pub fn display_name(&self) -> Option<&str> {
        if !self.is_authenticated() {
            return None;
        }
        self.display_name.as_deref()
    }

    /// Account email, or `None` unless authenticated.
    pub fn email(&self) -> Option<&str> {
        if !self.is_authenticated() {
            return None;
        }
        self.email.as_deref()
    }
}

/// Payload for establishing a fresh session. All five fields are written in
/// one synchronous call; there is no partial-write path.
#[derive(Clone, Debug)]
pub struct NewSession {
    pub token: String,
    pub role: Role,
    pub display_name: String,
    pub email: String,
}
