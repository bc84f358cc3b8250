//! Stores - durable persistence for the employee collection.
//!
//! A store wraps a single slot holding the whole collection as one
//! serialized JSON document, last write wins. Loading never fails:
//! an empty or unreadable slot falls back to the caller's seed, so a
//! corrupt slot cannot take the application down. Saving replaces the
//! prior value synchronously.

mod in_memory;
mod json_file;

use std::fmt;

use crate::employee::Employee;

/// Abstract durable slot for the employee collection.
pub trait DirectoryStore: Send + Sync {
    /// Read the stored collection, or `seed` when the slot is empty or
    /// unreadable.
    fn load(&self, seed: Vec<Employee>) -> Vec<Employee>;

    /// Replace the stored collection with `employees`.
    fn save(&self, employees: &[Employee]) -> Result<(), StoreError>;
}

/// Error type for store writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
    Serde(String),
    Storage(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::Serde(msg) => write!(f, "store serialization error: {}", msg),
            StoreError::Storage(msg) => write!(f, "store write error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
