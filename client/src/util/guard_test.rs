use super::*;

fn session(flag: Option<&str>, token: Option<&str>, role: Option<&str>) -> SessionSnapshot {
    SessionSnapshot {
        token: token.map(str::to_owned),
        authenticated: flag.map(str::to_owned),
        role: role.map(str::to_owned),
        display_name: None,
        email: None,
    }
}

#[test]
fn unauthenticated_redirects_to_login() {
    let s = session(None, None, None);
    assert_eq!(decide(&s, &[]), GuardOutcome::RedirectToLogin);
    assert_eq!(decide(&s, &[Role::Creator]), GuardOutcome::RedirectToLogin);
}

#[test]
fn flag_without_token_still_redirects_to_login() {
    let s = session(Some("true"), None, Some("user"));
    assert_eq!(decide(&s, &[]), GuardOutcome::RedirectToLogin);
}

#[test]
fn authenticated_with_no_role_restriction_is_allowed() {
    let s = session(Some("true"), Some("tok"), Some("user"));
    assert_eq!(decide(&s, &[]), GuardOutcome::Allow);
}

#[test]
fn authenticated_matching_role_is_allowed() {
    let s = session(Some("true"), Some("tok"), Some("creator"));
    assert_eq!(decide(&s, &[Role::Creator]), GuardOutcome::Allow);
    assert_eq!(decide(&s, &[Role::User, Role::Creator]), GuardOutcome::Allow);
}

#[test]
fn authenticated_wrong_role_redirects_home() {
    let s = session(Some("true"), Some("tok"), Some("user"));
    assert_eq!(decide(&s, &[Role::Creator]), GuardOutcome::RedirectToHome);
}

#[test]
fn missing_role_on_restricted_route_redirects_home() {
    let s = session(Some("true"), Some("tok"), None);
    assert_eq!(decide(&s, &[Role::User]), GuardOutcome::RedirectToHome);
}

#[test]
fn unparseable_role_on_restricted_route_redirects_home() {
    let s = session(Some("true"), Some("tok"), Some("moderator"));
    assert_eq!(decide(&s, &[Role::User, Role::Creator, Role::Admin]), GuardOutcome::RedirectToHome);
}

#[test]
fn unparseable_role_without_restriction_is_still_allowed() {
    // Authentication does not depend on the role field at all.
    let s = session(Some("true"), Some("tok"), Some("moderator"));
    assert_eq!(decide(&s, &[]), GuardOutcome::Allow);
}

#[test]
fn redirect_targets() {
    assert_eq!(redirect_target(GuardOutcome::Allow), None);
    assert_eq!(redirect_target(GuardOutcome::RedirectToLogin), Some("/login"));
    assert_eq!(redirect_target(GuardOutcome::RedirectToHome), Some("/"));
}
