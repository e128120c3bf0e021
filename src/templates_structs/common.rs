use askama::Template;

use super::PageContext;
use crate::models::role::Role;

pub const WELCOME_BANNER_URL: &str =
    "https://cdn.pixabay.com/photo/2016/11/29/09/08/board-1869266_1280.jpg";

#[derive(Template)]
#[template(path = "welcome.html")]
pub struct WelcomeTemplate {
    pub ctx: PageContext,
    pub banner_url: &'static str,
}

/// One radio button of the login role selector.
pub struct RoleOption {
    pub name: &'static str,
    pub checked: bool,
}

impl RoleOption {
    pub fn all(selected: Role) -> Vec<RoleOption> {
        Role::ALL
            .into_iter()
            .map(|role| RoleOption { name: role.name(), checked: role == selected })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    pub roles: Vec<RoleOption>,
    pub email: String,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "role_missing.html")]
pub struct RoleMissingTemplate {
    pub ctx: PageContext,
    pub requested: Option<String>,
}
