//! In-process storage backend.

use std::collections::HashMap;

use super::{CartStorage, StorageError, validate_key};

/// Storage backed by a `HashMap`. Contents live as long as the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `snapshot` under `key`.
    ///
    /// Seeding does not count as a write.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, snapshot: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), snapshot.into());
        Self { entries, writes: 0 }
    }

    /// Raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful writes since creation.
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.writes
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, snapshot: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.entries.insert(key.to_owned(), snapshot.to_owned());
        self.writes += 1;
        Ok(())
    }
}
