//! Cache Store Module
//!
//! Concurrency-safe table of entries behind a single lock.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::cache::{Entry, Status};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Unbounded in-memory entry table.
///
/// Every operation takes the same mutex for its whole map access, so all calls
/// on one instance are totally ordered. The lock is never held across an await.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-entry storage
    entries: Mutex<HashMap<String, Entry>>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns a copy of the entry stored under `key`.
    pub fn get(&self, key: &str) -> Result<Entry> {
        self.entries
            .lock()
            .get(key)
            .cloned()
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    // == Put ==
    /// Inserts or fully replaces the entry under `entry.key`.
    ///
    /// Marks the entry `Status::Ok` before insertion and returns what was stored.
    pub fn put(&self, mut entry: Entry) -> Entry {
        entry.status = Status::Ok;
        let stored = entry.clone();
        self.entries.lock().insert(entry.key.clone(), entry);
        stored
    }

    // == Delete ==
    /// Removes the entry under `key`, if any. Missing keys are not an error.
    pub fn delete(&self, key: &str) {
        self.entries.lock().remove(key);
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
