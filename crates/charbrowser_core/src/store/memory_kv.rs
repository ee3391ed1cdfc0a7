//! In-memory key-value storage for tests and ephemeral sessions.

use super::{KeyValueStore, StorageError, StorageResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Process-local key-value store that counts writes.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    reject_writes: Cell<bool>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one raw value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Makes every following `set` fail until switched back.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Raw stored value, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.reject_writes.get() {
            return Err(StorageError::WriteRejected(format!(
                "writes disabled for key `{key}`"
            )));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
