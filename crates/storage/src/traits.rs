//! Storage trait shared by all backends

use occlock_core::{Entry, StoreResult, Version};

/// Keyed store with version-checked writes
///
/// Implementations decide how keys are partitioned into exclusion regions,
/// but must keep every key's reads and writes serialized with respect to each
/// other and must apply writes through [`Entry::admit`], so each successful
/// write increments the key's version by exactly one.
///
/// # Thread Safety
///
/// All methods take `&self`; implementations are shared across threads
/// behind an `Arc`.
pub trait KeyedStore: Send + Sync {
    /// Get the entry stored under `key`
    ///
    /// Returns [`occlock_core::StoreError::NoKey`] if the key has never been
    /// written. Never observes a half-applied write.
    fn get(&self, key: &str) -> StoreResult<Entry>;

    /// Conditionally write `value` under `key`
    ///
    /// Succeeds only if `expected` equals the key's current version (0 for
    /// an absent key). Returns the version installed by the write.
    fn put(&self, key: &str, value: String, expected: Version) -> StoreResult<Version>;

    /// Check if a key exists
    fn contains(&self, key: &str) -> bool;

    /// Number of keys present
    fn len(&self) -> usize;

    /// Check if the store holds no keys
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
