//! Error types for store operations
//!
//! [`StoreError`] is what a store itself can answer: `NoKey` and `Version`
//! are expected outcomes of the conditional-write protocol, not faults.
//! [`Error`] is what a client sees; it adds `Transport` for requests or
//! replies that could not be carried.

use thiserror::Error;

/// Rejection produced by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StoreError {
    /// The operation referenced a key with no entry under conditions
    /// requiring one
    #[error("no such key")]
    NoKey,

    /// The write's expected version did not match the current version
    #[error("version mismatch")]
    Version,
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Outcome of a client operation that did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation referenced a key with no entry under conditions
    /// requiring one
    #[error("no such key")]
    NoKey,

    /// The write's expected version did not match the current version
    #[error("version mismatch")]
    Version,

    /// The request or its reply could not be carried to or from the store
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if a fresh read followed by another attempt may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Version | Error::Transport(_))
    }

    /// Check if this is the absent-key outcome
    pub fn is_no_key(&self) -> bool {
        matches!(self, Error::NoKey)
    }

    /// Check if this is an optimistic-concurrency conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Version)
    }
}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NoKey => Error::NoKey,
            StoreError::Version => Error::Version,
        }
    }
}
