//! JsonFileStore - file-backed store, one JSON document per slot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::employee::Employee;

use super::{DirectoryStore, StoreError};

/// Store backed by a single JSON file at a caller-supplied path.
///
/// A missing file is an empty slot. `save` rewrites the file whole,
/// creating parent directories on first write.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DirectoryStore for JsonFileStore {
    fn load(&self, seed: Vec<Employee>) -> Vec<Employee> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return seed,
            Err(err) => {
                tracing::warn!(%err, path = %self.path.display(), "collection file unreadable, using seed");
                return seed;
            }
        };

        match serde_json::from_str(&json) {
            Ok(employees) => employees,
            Err(err) => {
                tracing::warn!(%err, path = %self.path.display(), "collection file corrupt, using seed");
                seed
            }
        }
    }

    fn save(&self, employees: &[Employee]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(employees)
            .map_err(|e| StoreError::Serde(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Storage(e.to_string()))?;
            }
        }

        fs::write(&self.path, json).map_err(|e| StoreError::Storage(e.to_string()))
    }
}
