//! Lock error types
//!
//! Store conflicts never appear here: the lock absorbs `NoKey` and `Version`
//! by retrying. What remains are misuse, an exhausted retry budget, and
//! failures to inspect the lock state.

use thiserror::Error;

/// Lock errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LockError {
    /// An identity token must be non-empty; the empty value means unlocked
    #[error("lock identity must not be empty")]
    EmptyIdentity,

    /// The retry policy's attempt budget ran out before the lock was free
    #[error("lock not acquired after {attempts} attempts")]
    AttemptsExhausted {
        /// Attempts made
        attempts: u32,
    },

    /// The lock state could not be read
    #[error("store error: {0}")]
    Store(#[from] occlock_core::Error),
}

/// Result type for lock operations
pub type Result<T> = std::result::Result<T, LockError>;
