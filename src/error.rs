//! Unified error type for occlock.
//!
//! Each crate keeps its own error enum; this one flattens them so that
//! application code can use `?` across store, lock and configuration calls.

use thiserror::Error;

/// All occlock errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The key has no entry
    #[error("no such key")]
    NoKey,

    /// A conditional write presented a stale version
    #[error("version mismatch")]
    Version,

    /// A request or reply could not be carried
    #[error("transport error: {0}")]
    Transport(String),

    /// A lock was not acquired within its retry budget
    #[error("lock not acquired after {attempts} attempts")]
    LockUnavailable {
        /// Attempts made
        attempts: u32,
    },

    /// A lock was given an unusable identity token
    #[error("invalid lock identity: {0}")]
    InvalidIdentity(String),

    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(#[from] occlock_engine::ConfigError),
}

/// Result type for occlock operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if a fresh read followed by another attempt may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Version | Error::Transport(_) | Error::LockUnavailable { .. }
        )
    }

    /// Check if this is the absent-key outcome.
    pub fn is_no_key(&self) -> bool {
        matches!(self, Error::NoKey)
    }

    /// Check if this is a version conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Version)
    }
}

impl From<occlock_core::Error> for Error {
    fn from(e: occlock_core::Error) -> Self {
        use occlock_core::Error as CoreError;
        match e {
            CoreError::NoKey => Error::NoKey,
            CoreError::Version => Error::Version,
            CoreError::Transport(msg) => Error::Transport(msg),
        }
    }
}

impl From<occlock_core::StoreError> for Error {
    fn from(e: occlock_core::StoreError) -> Self {
        Error::from(occlock_core::Error::from(e))
    }
}

impl From<occlock_wire::WireError> for Error {
    fn from(e: occlock_wire::WireError) -> Self {
        Error::Transport(e.to_string())
    }
}

impl From<occlock_lock::LockError> for Error {
    fn from(e: occlock_lock::LockError) -> Self {
        use occlock_lock::LockError;
        match e {
            LockError::EmptyIdentity => Error::InvalidIdentity(e.to_string()),
            LockError::AttemptsExhausted { attempts } => Error::LockUnavailable { attempts },
            LockError::Store(inner) => Error::from(inner),
        }
    }
}
