use askama::Template;

use super::PageContext;
use crate::models::chart::{BarChart, LineChart};
use crate::models::dashboard::{PointsInput, StudentOverview};
use crate::models::student::Student;

#[derive(Template)]
#[template(path = "dashboard/student.html")]
pub struct StudentDashboardTemplate {
    pub ctx: PageContext,
    pub title: &'static str,
    pub overview: StudentOverview,
    pub activity: BarChart,
    pub leaderboard: Vec<Student>,
}

#[derive(Template)]
#[template(path = "dashboard/mentor.html")]
pub struct MentorDashboardTemplate {
    pub ctx: PageContext,
    pub title: &'static str,
    pub student_names: Vec<&'static str>,
    pub assign: PointsInput,
    pub leaderboard: Vec<Student>,
}

#[derive(Template)]
#[template(path = "dashboard/floorwing.html")]
pub struct FloorwingDashboardTemplate {
    pub ctx: PageContext,
    pub title: &'static str,
    pub students: Vec<Student>,
    pub performance: LineChart,
}

#[derive(Template)]
#[template(path = "dashboard/admin.html")]
pub struct AdminDashboardTemplate {
    pub ctx: PageContext,
    pub title: &'static str,
    pub students: Vec<Student>,
    pub student_names: Vec<&'static str>,
    pub adjust: PointsInput,
    pub report_month: String,
    pub report: BarChart,
}
