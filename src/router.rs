//! Maps the session state onto exactly one screen.

use crate::auth::session::{Page, RoleSlot, SessionState};
use crate::models::role::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Welcome,
    Login,
    Dashboard(Role),
    /// The session is on the dashboard but carries no usable role.
    /// `requested` holds the stored name when one was present.
    RoleMissing { requested: Option<String> },
}

pub fn route(state: &SessionState) -> View {
    match (state.page, &state.role) {
        (Page::Welcome, _) => View::Welcome,
        (Page::Login, _) => View::Login,
        (Page::Dashboard, RoleSlot::Known(role)) => View::Dashboard(*role),
        (Page::Dashboard, RoleSlot::Unset) => View::RoleMissing { requested: None },
        (Page::Dashboard, RoleSlot::Unrecognized(raw)) => View::RoleMissing {
            requested: Some(raw.clone()),
        },
    }
}
