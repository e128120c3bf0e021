use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::session::SessionState;
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::handlers::{auth_handlers, dashboard, welcome};
use crate::router::{self, View};

/// `GET /`: render whichever screen the session is on.
pub async fn index(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let state = SessionState::load_or_init(&session)?;
    match router::route(&state) {
        View::Welcome => welcome::render_page(&session, &config),
        View::Login => auth_handlers::render_login(&session, &config, None, String::new()),
        View::Dashboard(role) => dashboard::render_dashboard(&session, &config, role),
        View::RoleMissing { requested } => dashboard::render_role_missing(&session, &config, requested),
    }
}
