//! Sharded store
//!
//! Replaces the single mutex + HashMap with a DashMap.
//! Each key hashes to one shard; writes only lock the target shard.
//!
//! # Design
//!
//! - DashMap: 16-way sharded by default, shard count configurable
//! - FxHash: fast non-crypto hash for shard selection and lookups
//! - Per-key serialization: a put holds its shard's write lock from the
//!   version check until the new entry is installed
//! - Only a create (expected version 0 on an absent key) allocates an owned
//!   key; updates and rejections work on the borrowed key
//!
//! Unrelated keys in different shards never contend. Observable semantics are
//! identical to [`crate::GlobalStore`].

use crate::traits::KeyedStore;
use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use occlock_core::{Entry, StoreError, StoreResult, Version};
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

/// Default number of shards
pub const DEFAULT_SHARDS: usize = 16;

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Sharded storage - DashMap keyed by the user key
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - get(): Takes the key's shard read lock
/// - put(): Takes only the key's shard write lock
/// - Keys in different shards never contend
///
/// # Example
///
/// ```
/// use occlock_core::Version;
/// use occlock_storage::{KeyedStore, ShardedStore};
///
/// let store = ShardedStore::with_shards(8);
/// assert_eq!(store.put("k", "v".to_string(), Version::ZERO), Ok(Version::FIRST));
/// assert_eq!(store.get("k").unwrap().value, "v");
/// ```
pub struct ShardedStore {
    entries: DashMap<String, Entry, FxBuildHasher>,
    shard_count: usize,
}

impl ShardedStore {
    /// Create new sharded store with [`DEFAULT_SHARDS`] shards
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARDS)
    }

    /// Create a store with the given number of shards
    ///
    /// The count is rounded up to a power of two, with a minimum of 2.
    pub fn with_shards(shards: usize) -> Self {
        let shard_count = shards.max(2).next_power_of_two();
        Self {
            entries: DashMap::with_hasher_and_shard_amount(FxBuildHasher::default(), shard_count),
            shard_count,
        }
    }

    /// Get number of shards
    pub fn shard_count(&self) -> usize {
        self.shard_count
    }
}

impl KeyedStore for ShardedStore {
    #[inline]
    fn get(&self, key: &str) -> StoreResult<Entry> {
        self.entries
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NoKey)
    }

    fn put(&self, key: &str, value: String, expected: Version) -> StoreResult<Version> {
        // Existing key: the guard holds the shard write lock until dropped.
        if let Some(mut entry) = self.entries.get_mut(key) {
            let version = Entry::admit(Some(entry.value()), expected)?;
            let entry = entry.value_mut();
            entry.value = value;
            entry.version = version;
            return Ok(version);
        }
        if !expected.is_zero() {
            return Err(StoreError::NoKey);
        }

        // The key may have been created since the lookup; decide again under
        // the entry lock.
        match self.entries.entry(key.to_string()) {
            MapEntry::Occupied(mut occupied) => {
                let version = Entry::admit(Some(occupied.get()), expected)?;
                let entry = occupied.get_mut();
                entry.value = value;
                entry.version = version;
                Ok(version)
            }
            MapEntry::Vacant(vacant) => {
                let version = Entry::admit(None, expected)?;
                vacant.insert(Entry::with_version(value, version));
                Ok(version)
            }
        }
    }

    #[inline]
    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for ShardedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ShardedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShardedStore")
            .field("shard_count", &self.shard_count())
            .field("total_entries", &self.len())
            .finish()
    }
}
