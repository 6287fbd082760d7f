//! Stored entry and the conditional-write decision
//!
//! ## Decision Table
//!
//! | key exists? | expected          | action                      | result   |
//! |-------------|-------------------|-----------------------------|----------|
//! | no          | 0                 | create entry, version = 1   | Ok(1)    |
//! | no          | != 0              | no-op                       | NoKey    |
//! | yes         | == entry.version  | replace value, version += 1 | Ok(n+1)  |
//! | yes         | != entry.version  | no-op                       | Version  |
//!
//! [`Entry::admit`] is the only implementation of this table. Store backends
//! call it while holding the exclusion region that covers the key and install
//! the resulting entry before releasing it, so the version check, the value
//! replacement and the increment happen as one step.

use crate::error::{StoreError, StoreResult};
use crate::types::Version;
use serde::{Deserialize, Serialize};

/// Current value of a key
///
/// Each entry has:
/// - A value (arbitrary string; the empty string is a legal value)
/// - A version number (starts at 1, increments by exactly 1 per write)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Current value
    pub value: String,
    /// Version number (monotonically increasing)
    pub version: Version,
}

impl Entry {
    /// Create a new entry at version 1
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            version: Version::FIRST,
        }
    }

    /// Create an entry with explicit version
    pub fn with_version(value: impl Into<String>, version: Version) -> Self {
        Self {
            value: value.into(),
            version,
        }
    }

    /// Decide whether a write presenting `expected` may replace `current`
    ///
    /// Returns the version the write installs, or the reason it is rejected.
    /// `current` is `None` when the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use occlock_core::{Entry, StoreError, Version};
    ///
    /// assert_eq!(Entry::admit(None, Version::ZERO), Ok(Version::FIRST));
    /// assert_eq!(Entry::admit(None, Version::new(3)), Err(StoreError::NoKey));
    ///
    /// let current = Entry::with_version("a", Version::new(4));
    /// assert_eq!(Entry::admit(Some(&current), Version::new(4)), Ok(Version::new(5)));
    /// assert_eq!(Entry::admit(Some(&current), Version::new(2)), Err(StoreError::Version));
    /// ```
    pub fn admit(current: Option<&Entry>, expected: Version) -> StoreResult<Version> {
        match current {
            None if expected.is_zero() => Ok(Version::FIRST),
            None => Err(StoreError::NoKey),
            // An exhausted counter rejects further writes instead of repeating.
            Some(entry) if entry.version == expected => {
                entry.version.next().ok_or(StoreError::Version)
            }
            Some(_) => Err(StoreError::Version),
        }
    }

    /// Whether the stored value is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
