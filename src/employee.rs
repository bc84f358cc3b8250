use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted staff record.
///
/// The identifier is assigned by the directory on creation and never
/// changes for the lifetime of the record. Serialized field names use
/// camelCase and the hire date round-trips as an ISO `YYYY-MM-DD`
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub hire_date: NaiveDate,
    pub salary: f64,
}

/// Candidate fields for a new or updated record, prior to validation.
///
/// Identifiers are never user-supplied, so the draft carries every
/// field except `id`. The hire date is optional here; a draft without
/// one cannot pass validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub hire_date: Option<NaiveDate>,
    pub salary: f64,
}

impl EmployeeDraft {
    /// Snapshot an existing record back into draft form, e.g. to
    /// prefill an edit view.
    pub fn from_record(employee: &Employee) -> Self {
        EmployeeDraft {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            hire_date: Some(employee.hire_date),
            salary: employee.salary,
        }
    }
}
