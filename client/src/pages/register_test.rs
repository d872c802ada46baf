use super::*;

#[test]
fn registration_sessions_are_always_user_role() {
    let session = registration_session("alice", "alice@example.com");
    assert_eq!(session.role, Role::User);
}

#[test]
fn registration_session_carries_username_as_display_name() {
    let session = registration_session("alice", "alice@example.com");
    assert_eq!(session.display_name, "alice");
    assert_eq!(session.email, "alice@example.com");
}

#[test]
fn registration_sessions_mint_fresh_tokens() {
    let a = registration_session("alice", "alice@example.com");
    let b = registration_session("alice", "alice@example.com");
    assert!(a.token.starts_with("mock-jwt-token-"));
    assert_ne!(a.token, b.token);
}
