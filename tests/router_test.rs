//! View router tests: one view per state, exhaustive over roles, with an
//! explicit fallback instead of an empty dashboard.

use cohort::auth::session::{Page, RoleSlot, SessionState};
use cohort::models::role::Role;
use cohort::router::{View, route};

#[test]
fn test_welcome_and_login_ignore_role() {
    for role in [None, Some(Role::Student), Some(Role::Administrator)] {
        assert_eq!(route(&SessionState::new(Page::Welcome, role)), View::Welcome);
        assert_eq!(route(&SessionState::new(Page::Login, role)), View::Login);
    }
}

#[test]
fn test_dashboard_dispatches_on_every_role() {
    for role in Role::ALL {
        assert_eq!(
            route(&SessionState::new(Page::Dashboard, Some(role))),
            View::Dashboard(role)
        );
    }
}

#[test]
fn test_dashboard_without_role_falls_back() {
    assert_eq!(
        route(&SessionState::new(Page::Dashboard, None)),
        View::RoleMissing { requested: None }
    );
}

#[test]
fn test_dashboard_with_unrecognized_role_falls_back() {
    let state = SessionState {
        page: Page::Dashboard,
        role: RoleSlot::Unrecognized("Janitor".to_string()),
    };
    assert_eq!(
        route(&state),
        View::RoleMissing { requested: Some("Janitor".to_string()) }
    );
}

#[test]
fn test_default_state_routes_to_welcome() {
    assert_eq!(route(&SessionState::default()), View::Welcome);
}
