//! Single-region store
//!
//! One `parking_lot::Mutex` guards the whole map. Every get and put on every
//! key runs inside the same critical section, which trivially serializes all
//! writes to a key. Unrelated keys contend with each other; use
//! [`crate::ShardedStore`] when that matters.

use crate::traits::KeyedStore;
use occlock_core::{Entry, StoreError, StoreResult, Version};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// In-memory store guarded by a single mutex
pub struct GlobalStore {
    entries: Mutex<FxHashMap<String, Entry>>,
}

impl GlobalStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(FxHashMap::default()),
        }
    }

    /// Create a store with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(FxHashMap::with_capacity_and_hasher(
                capacity,
                Default::default(),
            )),
        }
    }
}

impl KeyedStore for GlobalStore {
    fn get(&self, key: &str) -> StoreResult<Entry> {
        let entries = self.entries.lock();
        entries.get(key).cloned().ok_or(StoreError::NoKey)
    }

    fn put(&self, key: &str, value: String, expected: Version) -> StoreResult<Version> {
        let mut entries = self.entries.lock();
        let version = Entry::admit(entries.get(key), expected)?;
        match entries.get_mut(key) {
            Some(entry) => {
                entry.value = value;
                entry.version = version;
            }
            None => {
                entries.insert(key.to_string(), Entry::with_version(value, version));
            }
        }
        Ok(version)
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

impl Default for GlobalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GlobalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalStore")
            .field("entries", &self.len())
            .finish()
    }
}
