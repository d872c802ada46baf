use super::*;
use crate::util::credentials::{DEMO_CREATOR, DEMO_USER};

#[test]
fn user_pair_on_user_tab_establishes_a_user_session() {
    let session = attempt_login(Role::User, DEMO_USER.email, DEMO_USER.password)
        .expect("matching pair must succeed");
    assert_eq!(session.role, Role::User);
    assert_eq!(session.display_name, "Demo User");
    assert_eq!(session.email, DEMO_USER.email);
    assert!(session.token.starts_with("mock-jwt-token-"));
}

#[test]
fn creator_pair_on_creator_tab_establishes_a_creator_session() {
    let session = attempt_login(Role::Creator, DEMO_CREATOR.email, DEMO_CREATOR.password)
        .expect("matching pair must succeed");
    assert_eq!(session.role, Role::Creator);
    assert_eq!(session.display_name, "Demo Creator");
}

#[test]
fn user_pair_on_creator_tab_is_rejected() {
    let result = attempt_login(Role::Creator, DEMO_USER.email, DEMO_USER.password);
    assert_eq!(result.unwrap_err(), LoginFailure::BadCredentials);
}

#[test]
fn wrong_password_is_a_generic_credential_failure() {
    let result = attempt_login(Role::User, DEMO_USER.email, "wrongpassword");
    assert_eq!(result.unwrap_err(), LoginFailure::BadCredentials);
}

#[test]
fn structural_errors_never_reach_the_credential_check() {
    // Malformed email and short password: reported per-field even though
    // this would also fail the credential comparison.
    let result = attempt_login(Role::User, "not-an-email", "short");
    match result.unwrap_err() {
        LoginFailure::Invalid(errors) => {
            assert!(errors.email.is_some());
            assert!(errors.password.is_some());
        }
        LoginFailure::BadCredentials => panic!("expected structural errors"),
    }
}

#[test]
fn landing_paths_by_role() {
    assert_eq!(landing_path(Role::User), "/dashboard");
    assert_eq!(landing_path(Role::Creator), "/creator-dashboard");
    assert_eq!(landing_path(Role::Admin), "/dashboard");
}
