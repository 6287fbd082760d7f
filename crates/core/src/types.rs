//! Core types for the versioned store
//!
//! This module defines the fundamental types used throughout the system:
//! - [`Version`]: Per-key version counter used for conditional writes

use serde::{Deserialize, Serialize};

/// Version of a single key
///
/// Versions are per key, not global. A key that has never been written has
/// the implicit version [`Version::ZERO`]; the first successful write installs
/// version 1 and every later successful write increments it by exactly one.
///
/// Version is used throughout the system:
/// - Stored alongside every value
/// - Presented by writers as the version they last observed
/// - Carried on the wire as a plain integer
///
/// # Examples
///
/// ```
/// use occlock_core::Version;
///
/// let v = Version::ZERO;
/// assert!(v.is_zero());
/// assert_eq!(v.next(), Some(Version::new(1)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Version(u64);

impl Version {
    /// Implicit version of an absent key
    pub const ZERO: Version = Version(0);

    /// Version installed by the write that creates a key
    pub const FIRST: Version = Version(1);

    /// Create a version from a raw counter
    pub const fn new(counter: u64) -> Self {
        Version(counter)
    }

    /// Raw counter value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Whether this is the implicit version of an absent key
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The version a successful write installs on top of this one
    ///
    /// `None` at `u64::MAX`: there is no successor, and repeating or wrapping
    /// the counter would let two writers present the same version.
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(n) => Some(Version(n)),
            None => None,
        }
    }
}

impl From<u64> for Version {
    fn from(counter: u64) -> Self {
        Version(counter)
    }
}

impl From<Version> for u64 {
    fn from(version: Version) -> Self {
        version.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}
