//! Lock configuration
//!
//! ```toml
//! [retry]
//! backoff_ms = 10
//! max_attempts = 50
//! ```

use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};

/// Settings applied to locks built from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockConfig {
    /// Acquisition retry policy
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl LockConfig {
    /// Configuration with the given retry policy
    pub fn new(retry: RetryPolicy) -> Self {
        Self { retry }
    }
}
