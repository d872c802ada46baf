//! Persistent session store over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module is the only place that touches the underlying storage keys;
//! everything else works with [`SessionSnapshot`] values or the store API
//! here. Reads and writes are synchronous and storage failures degrade to
//! absent fields / no-ops, matching the fail-closed accessor contract.
//!
//! TRADE-OFFS
//! ==========
//! Storage is shared across tabs with last-write-wins semantics; concurrent
//! tabs can race and that is accepted, not solved. SSR paths no-op so server
//! rendering stays deterministic.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod tests;

use crate::state::session::{
    AUTHENTICATED_KEY, DISPLAY_NAME_KEY, EMAIL_KEY, NewSession, ROLE_KEY, SESSION_KEYS,
    SessionSnapshot, TOKEN_KEY,
};

/// Minimal key-value seam over the persistence layer.
///
/// The browser implementation wraps `localStorage`; tests substitute an
/// in-memory map so the establish/clear contract is exercised natively.
pub trait SessionBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Read all five session fields from a backend.
pub fn load_from(backend: &impl SessionBackend) -> SessionSnapshot {
    SessionSnapshot {
        token: backend.read(TOKEN_KEY),
        authenticated: backend.read(AUTHENTICATED_KEY),
        role: backend.read(ROLE_KEY),
        display_name: backend.read(DISPLAY_NAME_KEY),
        email: backend.read(EMAIL_KEY),
    }
}

/// Write a freshly established session wholesale: token, the `"true"`
/// authenticated marker, role, display name, and email in one call.
pub fn establish_in(backend: &impl SessionBackend, session: &NewSession) {
    backend.write(TOKEN_KEY, &session.token);
    backend.write(AUTHENTICATED_KEY, "true");
    backend.write(ROLE_KEY, session.role.as_str());
    backend.write(DISPLAY_NAME_KEY, &session.display_name);
    backend.write(EMAIL_KEY, &session.email);
}

/// Remove all five session fields. Removing an absent key is a no-op, so
/// clearing twice is indistinguishable from clearing once.
pub fn clear_in(backend: &impl SessionBackend) {
    for key in SESSION_KEYS {
        backend.remove(key);
    }
}

/// Browser `localStorage` backend. Available only under `hydrate`; the
/// unit struct still exists elsewhere so call sites stay feature-free.
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl SessionBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(feature = "hydrate"))]
impl SessionBackend for BrowserStorage {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// Read the current session from browser storage.
pub fn load() -> SessionSnapshot {
    load_from(&BrowserStorage)
}

/// Establish a session in browser storage.
pub fn establish(session: &NewSession) {
    establish_in(&BrowserStorage, session);
}

/// Clear the session from browser storage.
pub fn clear() {
    clear_in(&BrowserStorage);
}

/// Clear the session and force a full-page navigation to the login screen.
///
/// Callers holding component-local copies of session data must reset them
/// themselves; in-memory state stays stale until the navigation lands.
pub fn logout() {
    clear();
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
