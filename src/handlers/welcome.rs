use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::csrf;
use crate::auth::session::{self, Page};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::redirect_home;
use crate::templates_structs::{PageContext, WELCOME_BANNER_URL, WelcomeTemplate};

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub fn render_page(session: &Session, config: &AppConfig) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session, config);
    render(WelcomeTemplate { ctx, banner_url: WELCOME_BANNER_URL })
}

/// "Proceed to Login".
pub async fn proceed(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session::go_to(&session, Page::Login, None)?;
    Ok(redirect_home())
}
