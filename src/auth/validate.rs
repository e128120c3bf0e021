use crate::models::student;

/// The dummy login check: both fields must be non-empty. Nothing else is validated.
pub fn validate_credentials(email: &str, password: &str) -> Option<String> {
    if email.is_empty() || password.is_empty() {
        return Some("Please enter email & password!".to_string());
    }
    None
}

/// A selected student must be on the roster.
pub fn validate_student(name: &str) -> Option<String> {
    if student::find_by_name(name).is_none() {
        return Some(format!("Unknown student: {name}"));
    }
    None
}
