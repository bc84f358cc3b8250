//! Derived views - pure projection of the collection through the
//! current search term, department filter, and sort settings.
//!
//! Projection never mutates the collection; it clones the matching
//! records into a fresh list on every call.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::employee::Employee;

/// Department filter sentinel matching every record.
pub const ALL_DEPARTMENTS: &str = "All";

/// Record fields a view can sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    FirstName,
    LastName,
    Email,
    Phone,
    Position,
    Department,
    HireDate,
    Salary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A field plus direction to sort the view by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub field: SortField,
    pub direction: SortDirection,
}

pub(crate) fn project(
    employees: &[Employee],
    search_term: &str,
    department: &str,
    sort: Option<SortConfig>,
) -> Vec<Employee> {
    let needle = search_term.to_lowercase();

    let mut view: Vec<Employee> = employees
        .iter()
        .filter(|emp| matches_search(emp, &needle) && matches_department(emp, department))
        .cloned()
        .collect();

    if let Some(sort) = sort {
        // Stable sort, so equal keys keep their collection order.
        view.sort_by(|a, b| {
            let ordering = compare(a, b, sort.field);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    view
}

fn matches_search(employee: &Employee, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [
        &employee.first_name,
        &employee.last_name,
        &employee.email,
        &employee.position,
        &employee.department,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

fn matches_department(employee: &Employee, department: &str) -> bool {
    department == ALL_DEPARTMENTS || employee.department == department
}

fn compare(a: &Employee, b: &Employee, field: SortField) -> Ordering {
    match field {
        SortField::FirstName => compare_text(&a.first_name, &b.first_name),
        SortField::LastName => compare_text(&a.last_name, &b.last_name),
        SortField::Email => compare_text(&a.email, &b.email),
        SortField::Phone => compare_text(&a.phone, &b.phone),
        SortField::Position => compare_text(&a.position, &b.position),
        SortField::Department => compare_text(&a.department, &b.department),
        SortField::HireDate => a.hire_date.cmp(&b.hire_date),
        SortField::Salary => a.salary.total_cmp(&b.salary),
    }
}

// Case-insensitive with a case-sensitive tiebreak, standing in for
// locale collation.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
