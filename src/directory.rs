//! Directory - the canonical employee collection and its operations.
//!
//! The directory owns the in-memory list, gates every write through
//! validation, and persists the whole collection after each successful
//! mutation. Derived views are recomputed on every read rather than
//! cached, so any mutation is reflected immediately.

use crate::employee::{Employee, EmployeeDraft};
use crate::id::IdGenerator;
use crate::store::DirectoryStore;
use crate::validation::{validate_employee, FieldError};
use crate::view::{self, SortConfig, ALL_DEPARTMENTS};

pub struct Directory<S, G> {
    store: S,
    ids: G,
    employees: Vec<Employee>,
    search_term: String,
    selected_department: String,
    sort_config: Option<SortConfig>,
}

impl<S: DirectoryStore, G: IdGenerator> Directory<S, G> {
    /// Open a directory over `store`, seeding an empty slot with the
    /// bundled sample records.
    pub fn open(store: S, ids: G) -> Self {
        Self::with_seed(store, ids, crate::seed::sample_employees())
    }

    /// Open a directory over `store`, using `seed` when the slot is
    /// empty or unreadable. The slot is read exactly once.
    pub fn with_seed(store: S, ids: G, seed: Vec<Employee>) -> Self {
        let employees = store.load(seed);
        Directory {
            store,
            ids,
            employees,
            search_term: String::new(),
            selected_department: ALL_DEPARTMENTS.to_string(),
            sort_config: None,
        }
    }

    /// Validate `draft` and append it as a new record under a fresh
    /// identifier. Returns the stored record, or every field error.
    /// Nothing changes on failure, including the identifier sequence.
    pub fn create(&mut self, draft: EmployeeDraft) -> Result<Employee, Vec<FieldError>> {
        let ids = &mut self.ids;
        let employee = admit(draft, || ids.next_id())?;

        tracing::debug!(id = %employee.id, "employee created");
        self.employees.push(employee.clone());
        self.persist();

        Ok(employee)
    }

    /// Validate `draft` and replace the record with identifier `id`,
    /// keeping the identifier. An unknown `id` is a silent no-op; the
    /// collection is persisted either way once validation passes.
    pub fn update(&mut self, id: &str, draft: EmployeeDraft) -> Result<(), Vec<FieldError>> {
        let employee = admit(draft, || id.to_string())?;

        if let Some(existing) = self.employees.iter_mut().find(|emp| emp.id == id) {
            tracing::debug!(id = %id, "employee updated");
            *existing = employee;
        }
        self.persist();

        Ok(())
    }

    /// Remove the record with identifier `id`. Unknown ids are a
    /// no-op; the collection is persisted either way.
    pub fn delete(&mut self, id: &str) {
        let before = self.employees.len();
        self.employees.retain(|emp| emp.id != id);
        if self.employees.len() < before {
            tracing::debug!(id = %id, "employee deleted");
        }
        self.persist();
    }

    /// Look up a record by identifier.
    pub fn get_by_id(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|emp| emp.id == id)
    }

    /// The canonical list, in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// `"All"` followed by the distinct departments currently present,
    /// in first-seen order.
    pub fn departments(&self) -> Vec<String> {
        let mut departments = vec![ALL_DEPARTMENTS.to_string()];
        for employee in &self.employees {
            if !departments[1..].contains(&employee.department) {
                departments.push(employee.department.clone());
            }
        }
        departments
    }

    /// The collection projected through the current search term,
    /// department filter, and sort settings. Recomputed on every call.
    pub fn view(&self) -> Vec<Employee> {
        view::project(
            &self.employees,
            &self.search_term,
            &self.selected_department,
            self.sort_config,
        )
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_department_filter(&mut self, department: impl Into<String>) {
        self.selected_department = department.into();
    }

    pub fn department_filter(&self) -> &str {
        &self.selected_department
    }

    pub fn set_sort_config(&mut self, sort: Option<SortConfig>) {
        self.sort_config = sort;
    }

    pub fn sort_config(&self) -> Option<SortConfig> {
        self.sort_config
    }

    // Save failures never surface to callers; the in-memory collection
    // stays authoritative and the next save catches up.
    fn persist(&self) {
        if let Err(err) = self.store.save(&self.employees) {
            tracing::warn!(%err, "failed to persist employee collection");
        }
    }
}

/// Gate a draft through validation and combine it with an identifier.
/// The identifier closure runs only when the draft is acceptable.
fn admit(
    draft: EmployeeDraft,
    id: impl FnOnce() -> String,
) -> Result<Employee, Vec<FieldError>> {
    let errors = validate_employee(&draft);
    let Some(hire_date) = draft.hire_date else {
        // Validation already recorded the missing hire date.
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Employee {
        id: id(),
        first_name: draft.first_name,
        last_name: draft.last_name,
        email: draft.email,
        phone: draft.phone,
        position: draft.position,
        department: draft.department,
        hire_date,
        salary: draft.salary,
    })
}
