use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::session::{self, Page};
use crate::auth::{csrf, validate};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::redirect_home;
use crate::handlers::welcome::CsrfOnly;
use crate::models::role::Role;
use crate::templates_structs::{LoginTemplate, PageContext, RoleOption};

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub csrf_token: String,
}

pub fn render_login(
    session: &Session,
    config: &AppConfig,
    error: Option<String>,
    email: String,
) -> Result<HttpResponse, AppError> {
    render_login_as(session, config, Role::Student, error, email)
}

fn render_login_as(
    session: &Session,
    config: &AppConfig,
    selected: Role,
    error: Option<String>,
    email: String,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session, config);
    let tmpl = LoginTemplate { ctx, roles: RoleOption::all(selected), email, error };
    render(tmpl)
}

/// Dummy login: any non-empty email and password succeed for the selected role.
pub async fn login_submit(
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let role = match form.role.parse::<Role>() {
        Ok(role) => role,
        Err(e) => {
            log::warn!("Login with {e}");
            return render_login(&session, &config, Some("Please select a role".to_string()), form.email);
        }
    };

    if let Some(error) = validate::validate_credentials(&form.email, &form.password) {
        log::warn!("Login as {role} rejected: missing email or password");
        return render_login_as(&session, &config, role, Some(error), form.email);
    }

    session::go_to(&session, Page::Dashboard, Some(role))?;
    Ok(redirect_home())
}

/// Leave the dashboard for the login screen. Welcome is never shown again.
pub async fn switch_role(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session::go_to(&session, Page::Login, None)?;
    Ok(redirect_home())
}
