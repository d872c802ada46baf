use std::cell::RefCell;
use std::collections::HashMap;

use super::*;
use crate::state::session::Role;

/// In-memory backend standing in for `localStorage`.
#[derive(Default)]
struct MemoryStorage {
    map: RefCell<HashMap<String, String>>,
}

impl SessionBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.map.borrow_mut().remove(key);
    }
}

fn demo_session() -> NewSession {
    NewSession {
        token: "mock-jwt-token-1234".to_owned(),
        role: Role::Creator,
        display_name: "Demo Creator".to_owned(),
        email: "creator@example.com".to_owned(),
    }
}

#[test]
fn establish_writes_all_five_fields() {
    let storage = MemoryStorage::default();
    establish_in(&storage, &demo_session());

    let snapshot = load_from(&storage);
    assert!(snapshot.is_authenticated());
    assert_eq!(snapshot.role(), Some(Role::Creator));
    assert_eq!(snapshot.display_name(), Some("Demo Creator"));
    assert_eq!(snapshot.email(), Some("creator@example.com"));
    assert_eq!(snapshot.token.as_deref(), Some("mock-jwt-token-1234"));
}

#[test]
fn establish_sets_exact_true_literal() {
    let storage = MemoryStorage::default();
    establish_in(&storage, &demo_session());
    assert_eq!(storage.read("isAuthenticated").as_deref(), Some("true"));
}

#[test]
fn clear_removes_all_five_fields() {
    let storage = MemoryStorage::default();
    establish_in(&storage, &demo_session());
    clear_in(&storage);

    assert!(storage.map.borrow().is_empty());
    let snapshot = load_from(&storage);
    assert!(!snapshot.is_authenticated());
    assert_eq!(snapshot.role(), None);
    assert_eq!(snapshot.display_name(), None);
    assert_eq!(snapshot.email(), None);
}

#[test]
fn clear_twice_is_idempotent() {
    let storage = MemoryStorage::default();
    establish_in(&storage, &demo_session());
    clear_in(&storage);
    let after_once = load_from(&storage);
    clear_in(&storage);
    let after_twice = load_from(&storage);
    assert_eq!(after_once, after_twice);
}

#[test]
fn clear_on_empty_storage_is_noop() {
    let storage = MemoryStorage::default();
    clear_in(&storage);
    assert!(storage.map.borrow().is_empty());
}

#[test]
fn establish_overwrites_previous_session() {
    let storage = MemoryStorage::default();
    establish_in(&storage, &demo_session());
    establish_in(
        &storage,
        &NewSession {
            token: "mock-jwt-token-5678".to_owned(),
            role: Role::User,
            display_name: "Demo User".to_owned(),
            email: "user@example.com".to_owned(),
        },
    );

    let snapshot = load_from(&storage);
    assert_eq!(snapshot.role(), Some(Role::User));
    assert_eq!(snapshot.email(), Some("user@example.com"));
}

#[test]
fn load_tolerates_partial_storage() {
    let storage = MemoryStorage::default();
    storage.write("isAuthenticated", "true");
    // No token written: the flag alone must not authenticate.
    let snapshot = load_from(&storage);
    assert!(!snapshot.is_authenticated());
}
