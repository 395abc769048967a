//! # In-Memory Module Store
//!
//! Key-value storage partition for testing. A production host supplies its
//! own durable partition behind the same port.

use crate::domain::errors::StoreError;
use crate::ports::outbound::ModuleStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory [`ModuleStore`] for tests.
#[derive(Debug, Default)]
pub struct InMemoryModuleStore {
    entries: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl InMemoryModuleStore {
    /// Create a new empty partition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every key-value pair, sorted by key. Lets tests assert
    /// a failed admin call left the partition byte-for-byte unchanged.
    pub fn snapshot(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        let mut pairs: Vec<_> = self
            .entries
            .read()
            .expect("store lock poisoned")
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        pairs.sort();
        pairs
    }
}

impl ModuleStore for InMemoryModuleStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .entries
            .read()
            .map_err(|e| StoreError::new(e.to_string()))?
            .get(key)
            .cloned())
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.entries
            .write()
            .map_err(|e| StoreError::new(e.to_string()))?
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
