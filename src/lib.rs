mod directory;
mod employee;
mod id;
mod seed;
mod store;
mod validation;
mod view;

pub use directory::Directory;
pub use employee::{Employee, EmployeeDraft};
pub use id::{IdGenerator, SequentialIds, UuidIds};
pub use seed::sample_employees;
pub use store::{DirectoryStore, InMemoryStore, JsonFileStore, StoreError};
pub use validation::{validate_employee, FieldError};
pub use view::{SortConfig, SortDirection, SortField, ALL_DEPARTMENTS};
