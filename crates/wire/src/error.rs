//! Wire error types

use thiserror::Error;

/// Failure to move a message to or from bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    /// The message could not be encoded
    #[error("encode error: {0}")]
    Encode(String),

    /// The bytes are not a valid message
    #[error("decode error: {0}")]
    Decode(String),
}

/// Result type for codec operations
pub type WireResult<T> = std::result::Result<T, WireError>;

impl From<WireError> for occlock_core::Error {
    fn from(e: WireError) -> Self {
        occlock_core::Error::Transport(e.to_string())
    }
}
