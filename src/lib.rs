use actix_session::{SessionMiddleware, config::CookieContentSecurity, storage::CookieSessionStore};
use actix_web::{cookie::Key, web};

pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod router;
pub mod templates_structs;

/// Name of the cookie that carries the session state.
pub const SESSION_COOKIE: &str = "cohort_session";

/// Build the cookie-backed session middleware shared by the server and tests.
pub fn session_middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_secure(secure)
        .cookie_http_only(true)
        .build()
}

/// Register every application route. Static files and the `handlers::not_found`
/// fallback are mounted by the binary after these routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::view::index))
        .route("/welcome", web::post().to(handlers::welcome::proceed))
        .route("/login", web::post().to(handlers::auth_handlers::login_submit))
        .service(
            web::scope("/dashboard")
                .wrap(actix_web::middleware::from_fn(auth::middleware::require_dashboard))
                .route("/switch-role", web::post().to(handlers::auth_handlers::switch_role))
                .route("/mentor/assign", web::post().to(handlers::dashboard::mentor_assign))
                .route("/admin/points", web::post().to(handlers::dashboard::admin_update)),
        );
}
