//! Field-level validation for employee drafts.
//!
//! Rules are checked independently and in field declaration order, so
//! one pass reports every problem and identical bad input always
//! yields the same error list.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::employee::EmployeeDraft;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").unwrap());

/// A single validation failure, keyed by the serialized field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        FieldError { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check `draft` against every rule. An empty list means acceptable.
pub fn validate_employee(draft: &EmployeeDraft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.first_name.trim().is_empty() {
        errors.push(FieldError::new("firstName", "First name is required"));
    }

    if draft.last_name.trim().is_empty() {
        errors.push(FieldError::new("lastName", "Last name is required"));
    }

    if draft.email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !EMAIL.is_match(&draft.email) {
        errors.push(FieldError::new("email", "Email is invalid"));
    }

    if draft.phone.trim().is_empty() {
        errors.push(FieldError::new("phone", "Phone is required"));
    } else if !PHONE.is_match(&draft.phone) {
        errors.push(FieldError::new("phone", "Phone format is invalid"));
    }

    if draft.position.trim().is_empty() {
        errors.push(FieldError::new("position", "Position is required"));
    }

    if draft.department.trim().is_empty() {
        errors.push(FieldError::new("department", "Department is required"));
    }

    if draft.hire_date.is_none() {
        errors.push(FieldError::new("hireDate", "Hire date is required"));
    }

    if !draft.salary.is_finite() || draft.salary <= 0.0 {
        errors.push(FieldError::new("salary", "Salary must be a positive number"));
    }

    errors
}
