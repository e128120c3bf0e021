pub mod chart;
pub mod dashboard;
pub mod role;
pub mod student;
