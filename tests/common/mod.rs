//! Shared test infrastructure for HTTP-level tests.
//!
//! # Building an app
//! Tests build the service inline so the opaque service type stays local:
//!
//! ```ignore
//! let app = test::init_service(
//!     App::new()
//!         .wrap(session())
//!         .app_data(config())
//!         .configure(cohort::configure)
//!         .configure(test_routes),
//! ).await;
//! ```
//!
//! A [`Jar`] carries the session cookie from one response to the next request.

#![allow(dead_code)]

use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, test::TestRequest, web};
use regex::Regex;

use cohort::SESSION_COOKIE;
use cohort::config::AppConfig;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const TEST_EMAIL: &str = "student@example.com";
pub const TEST_PASSWORD: &str = "hunter2";
pub const TEST_APP_NAME: &str = "Cohort Test";

// ============================================================================
// APP SETUP
// ============================================================================

pub fn config() -> web::Data<AppConfig> {
    web::Data::new(AppConfig::from_lookup(|name| match name {
        "COHORT_APP_NAME" => Some(TEST_APP_NAME.to_string()),
        _ => None,
    }))
}

pub fn session() -> SessionMiddleware<CookieSessionStore> {
    cohort::session_middleware(Key::generate(), false)
}

/// Test-only routes that write raw values into the session, for states the
/// UI cannot produce.
pub fn test_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/test/session/{page}/{role}",
        web::get().to(|session: Session, path: web::Path<(String, String)>| async move {
            let (page, role) = path.into_inner();
            session.insert("page", page).expect("insert page");
            if role == "-" {
                session.remove("role");
            } else {
                session.insert("role", role).expect("insert role");
            }
            HttpResponse::Ok().finish()
        }),
    );
}

// ============================================================================
// COOKIE JAR
// ============================================================================

/// Holds the latest session cookie issued by the app.
#[derive(Default)]
pub struct Jar {
    cookie: Option<Cookie<'static>>,
}

impl Jar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the current session cookie (if any) to a request.
    pub fn attach(&self, req: TestRequest) -> TestRequest {
        match &self.cookie {
            Some(cookie) => req.cookie(cookie.clone()),
            None => req,
        }
    }

    /// Remember the session cookie set by a response, if it set one.
    pub fn store<B>(&mut self, resp: &ServiceResponse<B>) {
        if let Some(cookie) = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
        {
            self.cookie = Some(cookie.into_owned());
        }
    }
}

// ============================================================================
// REQUEST / RESPONSE HELPERS
// ============================================================================

pub fn get(uri: &str) -> TestRequest {
    TestRequest::get().uri(uri)
}

/// URL-encoded POST with the given fields.
pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> TestRequest {
    let body = serde_urlencoded::to_string(fields).expect("encode form");
    TestRequest::post()
        .uri(uri)
        .insert_header(ContentType::form_url_encoded())
        .set_payload(body)
}

pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

/// Pull the CSRF token out of a rendered page.
pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("valid regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page should carry a CSRF token")
}

/// Text of column `index` in every body row of table `id`.
pub fn column(html: &str, id: &str, index: usize) -> Vec<String> {
    let table_re = Regex::new(&format!(r#"(?s)<table class="data" id="{id}">.*?<tbody>(.*?)</tbody>"#))
        .expect("valid regex");
    let body = table_re
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or_default();
    let row_re = Regex::new(r"(?s)<tr>(.*?)</tr>").expect("valid regex");
    let cell_re = Regex::new(r"<td>([^<]*)</td>").expect("valid regex");
    row_re
        .captures_iter(body)
        .filter_map(|row| {
            cell_re
                .captures_iter(&row[1])
                .nth(index)
                .map(|cell| cell[1].to_string())
        })
        .collect()
}
