use actix_web::HttpResponse;

pub mod auth_handlers;
pub mod dashboard;
pub mod view;
pub mod welcome;

/// Post/redirect/get back to the routed view.
pub(crate) fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish()
}

/// Fallback for paths no route matches.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../templates/errors/404.html"))
}
