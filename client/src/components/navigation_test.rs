use super::*;

fn authed(role: &str) -> SessionSnapshot {
    SessionSnapshot {
        token: Some("tok".to_owned()),
        authenticated: Some("true".to_owned()),
        role: Some(role.to_owned()),
        display_name: Some("Demo".to_owned()),
        email: None,
    }
}

#[test]
fn creators_get_the_creator_dashboard_link() {
    assert_eq!(dashboard_path(&authed("creator")), "/creator-dashboard");
}

#[test]
fn users_get_the_user_dashboard_link() {
    assert_eq!(dashboard_path(&authed("user")), "/dashboard");
}

#[test]
fn logged_out_sessions_get_the_user_dashboard_link() {
    assert_eq!(dashboard_path(&SessionSnapshot::default()), "/dashboard");
}

#[test]
fn nav_links_follow_the_dashboard_target() {
    let links = nav_links(&authed("creator"));
    assert!(links.contains(&("Dashboard", "/creator-dashboard")));
    let links = nav_links(&authed("user"));
    assert!(links.contains(&("Dashboard", "/dashboard")));
}
