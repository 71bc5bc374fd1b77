//! In-process storage for ephemeral stores and tests.

use super::{StateStorage, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// `StateStorage` backed by a process-local map. Contents vanish on drop.
#[derive(Debug, Default)]
pub struct MemoryStateStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStateStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StateStorage for MemoryStateStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
