use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::Local;
use serde::Deserialize;

use crate::auth::session::{require_role, set_flash, set_flash_error};
use crate::auth::{csrf, validate};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::redirect_home;
use crate::models::chart::{BarChart, LineChart};
use crate::models::dashboard::{self, ADJUST_POINTS, ASSIGN_POINTS, StudentOverview};
use crate::models::role::Role;
use crate::models::student;
use crate::templates_structs::{
    AdminDashboardTemplate, FloorwingDashboardTemplate, MentorDashboardTemplate, PageContext,
    RoleMissingTemplate, StudentDashboardTemplate,
};

#[derive(Deserialize)]
pub struct AssignPointsForm {
    pub student: String,
    pub points: i64,
    #[serde(default)]
    pub note: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct UpdatePointsForm {
    pub student: String,
    pub new_points: i64,
    pub csrf_token: String,
}

pub fn render_dashboard(session: &Session, config: &AppConfig, role: Role) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session, config);
    let title = role.dashboard_title();
    let mut rng = rand::rng();

    match role {
        Role::Student => render(StudentDashboardTemplate {
            ctx,
            title,
            overview: StudentOverview::sample(&mut rng),
            activity: BarChart::new(&dashboard::monthly_activity()),
            leaderboard: student::leaderboard(),
        }),
        Role::Mentor => render(MentorDashboardTemplate {
            ctx,
            title,
            student_names: student::names(),
            assign: ASSIGN_POINTS,
            leaderboard: student::leaderboard(),
        }),
        Role::Floorwing => render(FloorwingDashboardTemplate {
            ctx,
            title,
            students: student::roster().to_vec(),
            performance: LineChart::new(&dashboard::floor_performance()),
        }),
        Role::Administrator => render(AdminDashboardTemplate {
            ctx,
            title,
            students: student::roster().to_vec(),
            student_names: student::names(),
            adjust: ADJUST_POINTS,
            report_month: Local::now().format("%B %Y").to_string(),
            report: BarChart::new(&dashboard::monthly_report(&mut rng)),
        }),
    }
}

/// Dashboard requested without a usable role.
pub fn render_role_missing(
    session: &Session,
    config: &AppConfig,
    requested: Option<String>,
) -> Result<HttpResponse, AppError> {
    match &requested {
        Some(raw) => log::warn!("Dashboard requested for unrecognized role '{raw}'"),
        None => log::warn!("Dashboard requested without a role"),
    }
    let ctx = PageContext::build(session, config);
    render(RoleMissingTemplate { ctx, requested })
}

/// Mentor "Assign Points". Shows a confirmation only; the roster is never changed.
pub async fn mentor_assign(
    session: Session,
    form: web::Form<AssignPointsForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    require_role(&session, Role::Mentor)?;

    if let Some(error) = validate::validate_student(&form.student) {
        log::warn!("Assign points rejected: {error}");
        set_flash_error(&session, &error)?;
        return Ok(redirect_home());
    }

    let points = ASSIGN_POINTS.normalize(form.points);
    if !form.note.trim().is_empty() {
        log::debug!("Assign note for {}: {}", form.student, form.note.trim());
    }
    log::info!("Mentor assigned {points} points to {}", form.student);
    set_flash(&session, &format!("{points} points assigned to {} 🎯", form.student))?;
    Ok(redirect_home())
}

/// Administrator "Update Points". Shows a confirmation only; the roster is never changed.
pub async fn admin_update(
    session: Session,
    form: web::Form<UpdatePointsForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    require_role(&session, Role::Administrator)?;

    if let Some(error) = validate::validate_student(&form.student) {
        log::warn!("Update points rejected: {error}");
        set_flash_error(&session, &error)?;
        return Ok(redirect_home());
    }

    let new_points = ADJUST_POINTS.normalize(form.new_points);
    log::info!("Administrator set {}'s points to {new_points}", form.student);
    set_flash(&session, &format!("Updated {}'s points to {new_points}", form.student))?;
    Ok(redirect_home())
}
