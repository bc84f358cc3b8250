//! Identifier generation for new records.
//!
//! The generator is injected into the directory so production code can
//! use random identifiers while tests supply deterministic ones.

use uuid::Uuid;

/// Source of fresh record identifiers.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 identifiers, the production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter identifiers, for tests and demos.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        SequentialIds { next: 1 }
    }
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(next: u64) -> Self {
        SequentialIds { next }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = self.next.to_string();
        self.next += 1;
        id
    }
}
