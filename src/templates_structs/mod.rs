// Template context structures for Askama templates, organized by screen.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{SessionState, take_flash, take_flash_error};
use crate::config::AppConfig;
use crate::models::role::Role;

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: String,
    pub role: Option<Role>,
    pub csrf_token: String,
    pub flash: Option<String>,
    pub flash_error: Option<String>,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig) -> Self {
        let role = SessionState::read(session).and_then(|state| state.role.role());
        let csrf_token = csrf::get_or_create_token(session);
        let flash = take_flash(session);
        let flash_error = take_flash_error(session);
        Self {
            app_name: config.app_name.clone(),
            role,
            csrf_token,
            flash,
            flash_error,
        }
    }
}

mod common;
mod dashboard;

pub use self::common::{
    LoginTemplate, RoleMissingTemplate, RoleOption, WELCOME_BANNER_URL, WelcomeTemplate,
};
pub use self::dashboard::{
    AdminDashboardTemplate, FloorwingDashboardTemplate, MentorDashboardTemplate,
    StudentDashboardTemplate,
};
