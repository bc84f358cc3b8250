//! InMemoryStore - shared-slot store for testing and development.

use std::sync::{Arc, RwLock};

use crate::employee::Employee;

use super::{DirectoryStore, StoreError};

/// In-memory store holding the serialized collection in a single slot.
///
/// Clone-friendly via Arc: clones share the slot, so a directory built
/// over a clone observes earlier saves. That makes a reload through a
/// fresh directory behave like a process restart over surviving
/// storage.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    slot: Arc<RwLock<Option<String>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the raw slot contents, bypassing serialization.
    /// Lets tests stage corrupt or hand-written documents.
    pub fn set_raw(&self, contents: impl Into<String>) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(contents.into());
        }
    }

    /// The raw serialized document, if any value has been saved.
    pub fn raw(&self) -> Option<String> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }
}

impl DirectoryStore for InMemoryStore {
    fn load(&self, seed: Vec<Employee>) -> Vec<Employee> {
        let slot = match self.slot.read() {
            Ok(slot) => slot,
            Err(_) => return seed,
        };

        match slot.as_deref() {
            Some(json) => match serde_json::from_str(json) {
                Ok(employees) => employees,
                Err(err) => {
                    tracing::warn!(%err, "stored collection unreadable, using seed");
                    seed
                }
            },
            None => seed,
        }
    }

    fn save(&self, employees: &[Employee]) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(employees).map_err(|e| StoreError::Serde(e.to_string()))?;

        let mut slot = self
            .slot
            .write()
            .map_err(|_| StoreError::LockPoisoned("save"))?;
        *slot = Some(json);

        Ok(())
    }
}
