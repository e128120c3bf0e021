use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use crate::auth::session::{Page, SessionState};

/// Middleware function that lets only sessions on the dashboard screen through.
/// Anything else is redirected to / with its state untouched.
pub async fn require_dashboard(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let session = req.get_session();
    let on_dashboard = SessionState::read(&session)
        .is_some_and(|state| state.page == Page::Dashboard);

    if !on_dashboard {
        log::warn!("Dashboard action {} outside the dashboard, redirecting", req.path());
        let response = HttpResponse::SeeOther()
            .insert_header(("Location", "/"))
            .finish();
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}
