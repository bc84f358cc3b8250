use chrono::NaiveDate;
use staff_directory::{Directory, EmployeeDraft, InMemoryStore, SequentialIds};

/// A directory over a fresh in-memory store with deterministic ids and
/// no seed records.
pub fn empty_directory() -> Directory<InMemoryStore, SequentialIds> {
    Directory::with_seed(InMemoryStore::new(), SequentialIds::new(), Vec::new())
}

/// A valid draft with derivable email and fixed hire date.
pub fn draft(first: &str, last: &str, department: &str, salary: f64) -> EmployeeDraft {
    EmployeeDraft {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!(
            "{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase()
        ),
        phone: "1234567890".to_string(),
        position: "Engineer".to_string(),
        department: department.to_string(),
        hire_date: NaiveDate::from_ymd_opt(2020, 1, 15),
        salary,
    }
}
