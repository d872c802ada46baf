use super::*;

#[test]
fn user_pair_matches_user_tab() {
    assert!(check(Role::User, DEMO_USER.email, DEMO_USER.password));
}

#[test]
fn creator_pair_matches_creator_tab() {
    assert!(check(Role::Creator, DEMO_CREATOR.email, DEMO_CREATOR.password));
}

#[test]
fn user_pair_fails_on_creator_tab() {
    // The check targets the selected tab's pair, never both pairs.
    assert!(!check(Role::Creator, DEMO_USER.email, DEMO_USER.password));
}

#[test]
fn creator_pair_fails_on_user_tab() {
    assert!(!check(Role::User, DEMO_CREATOR.email, DEMO_CREATOR.password));
}

#[test]
fn wrong_password_fails() {
    assert!(!check(Role::User, DEMO_USER.email, "not-the-password"));
}

#[test]
fn wrong_email_fails() {
    assert!(!check(Role::User, "someone@else.com", DEMO_USER.password));
}

#[test]
fn admin_tab_has_no_pair() {
    assert!(account_for(Role::Admin).is_none());
    assert!(!check(Role::Admin, DEMO_USER.email, DEMO_USER.password));
}

#[test]
fn minted_tokens_are_opaque_and_non_empty() {
    let token = mint_token();
    assert!(token.starts_with("mock-jwt-token-"));
    assert!(token.len() > "mock-jwt-token-".len());
}

#[test]
fn minted_tokens_differ_between_calls() {
    assert_ne!(mint_token(), mint_token());
}
