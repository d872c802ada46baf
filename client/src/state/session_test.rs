use super::*;

fn authed(role: &str) -> SessionSnapshot {
    SessionSnapshot {
        token: Some("mock-jwt-token-abc".to_owned()),
        authenticated: Some("true".to_owned()),
        role: Some(role.to_owned()),
        display_name: Some("Demo User".to_owned()),
        email: Some("demo@example.com".to_owned()),
    }
}

// =============================================================
// is_authenticated: all four flag/token combinations
// =============================================================

#[test]
fn authenticated_when_flag_true_and_token_present() {
    assert!(authed("user").is_authenticated());
}

#[test]
fn not_authenticated_when_flag_missing() {
    let mut s = authed("user");
    s.authenticated = None;
    assert!(!s.is_authenticated());
}

#[test]
fn not_authenticated_when_token_missing() {
    let mut s = authed("user");
    s.token = None;
    assert!(!s.is_authenticated());
}

#[test]
fn not_authenticated_when_both_missing() {
    assert!(!SessionSnapshot::default().is_authenticated());
}

#[test]
fn not_authenticated_when_flag_not_exact_literal() {
    for flag in ["TRUE", "True", "1", "yes", "false", ""] {
        let mut s = authed("user");
        s.authenticated = Some(flag.to_owned());
        assert!(!s.is_authenticated(), "flag {flag:?} must not authenticate");
    }
}

#[test]
fn not_authenticated_when_token_empty() {
    let mut s = authed("user");
    s.token = Some(String::new());
    assert!(!s.is_authenticated());
}

// =============================================================
// role: null unless authenticated, closed enum at the boundary
// =============================================================

#[test]
fn role_none_when_unauthenticated() {
    let mut s = authed("creator");
    s.token = None;
    assert_eq!(s.role(), None);
}

#[test]
fn role_parses_known_variants() {
    assert_eq!(authed("user").role(), Some(Role::User));
    assert_eq!(authed("creator").role(), Some(Role::Creator));
    assert_eq!(authed("admin").role(), Some(Role::Admin));
}

#[test]
fn role_none_for_unrecognized_string() {
    assert_eq!(authed("superuser").role(), None);
    assert_eq!(authed("").role(), None);
    assert_eq!(authed("User").role(), None);
}

#[test]
fn role_none_when_field_missing() {
    let mut s = authed("user");
    s.role = None;
    assert_eq!(s.role(), None);
}

#[test]
fn role_predicates_match_literals() {
    assert!(authed("user").is_user());
    assert!(!authed("user").is_creator());
    assert!(authed("creator").is_creator());
    assert!(!authed("creator").is_admin());
    assert!(authed("admin").is_admin());
}

#[test]
fn role_round_trips_through_storage_form() {
    for role in [Role::User, Role::Creator, Role::Admin] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

// =============================================================
// display name / email: same null-unless-authenticated contract
// =============================================================

#[test]
fn display_name_and_email_visible_when_authenticated() {
    let s = authed("user");
    assert_eq!(s.display_name(), Some("Demo User"));
    assert_eq!(s.email(), Some("demo@example.com"));
}

#[test]
fn display_name_and_email_none_when_unauthenticated() {
    let mut s = authed("user");
    s.authenticated = Some("false".to_owned());
    assert_eq!(s.display_name(), None);
    assert_eq!(s.email(), None);
}
