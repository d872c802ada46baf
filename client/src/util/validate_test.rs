use super::*;

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn accepts_ordinary_addresses() {
    assert!(is_valid_email("user@docai.app"));
    assert!(is_valid_email("first.last@sub.example.co"));
}

#[test]
fn rejects_missing_at_or_parts() {
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("user@nodot"));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@example."));
}

#[test]
fn rejects_whitespace_and_double_at() {
    assert!(!is_valid_email("us er@example.com"));
    assert!(!is_valid_email("user@@example.com"));
    assert!(!is_valid_email(""));
}

// =============================================================
// validate_login
// =============================================================

#[test]
fn login_valid_input_has_no_errors() {
    assert!(validate_login("user@docai.app", "userpass123").is_empty());
}

#[test]
fn login_flags_bad_email() {
    let errors = validate_login("nope", "userpass123");
    assert_eq!(errors.email, Some("Invalid email address."));
    assert_eq!(errors.password, None);
}

#[test]
fn login_flags_short_password() {
    let errors = validate_login("user@docai.app", "short");
    assert_eq!(errors.email, None);
    assert_eq!(errors.password, Some("Password must be at least 8 characters."));
}

#[test]
fn login_reports_both_fields_at_once() {
    let errors = validate_login("nope", "short");
    assert!(errors.email.is_some());
    assert!(errors.password.is_some());
}

// =============================================================
// validate_register
// =============================================================

#[test]
fn register_valid_input_has_no_errors() {
    assert!(validate_register("alice", "alice@example.com", "password8", "password8").is_empty());
}

#[test]
fn register_flags_short_username() {
    let errors = validate_register("al", "alice@example.com", "password8", "password8");
    assert_eq!(errors.username, Some("Username must be at least 3 characters."));
}

#[test]
fn register_username_is_trimmed_before_length_check() {
    let errors = validate_register("  a  ", "alice@example.com", "password8", "password8");
    assert_eq!(errors.username, Some("Username must be at least 3 characters."));
}

#[test]
fn register_flags_short_password() {
    let errors = validate_register("alice", "alice@example.com", "short", "short");
    assert_eq!(errors.password, Some("Password must be at least 8 characters."));
}

#[test]
fn register_mismatch_is_attributed_to_confirmation_field() {
    let errors = validate_register("alice", "alice@example.com", "password8", "password9");
    assert_eq!(errors.password, None);
    assert_eq!(errors.confirm_password, Some("Passwords do not match."));
}

#[test]
fn register_empty_confirmation_asks_for_confirmation() {
    let errors = validate_register("alice", "alice@example.com", "password8", "");
    assert_eq!(errors.confirm_password, Some("Please confirm your password."));
}
