//! Retry policy for lock acquisition
//!
//! Acquisition is a spin loop: read, try to claim, and on any failure wait a
//! fixed delay before trying again. The policy controls that delay and,
//! optionally, how many attempts are made before giving up.
//!
//! There is no exponential growth and no jitter. The default policy waits
//! 10 ms between attempts and never gives up.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default delay between attempts
pub const DEFAULT_BACKOFF: Duration = Duration::from_millis(10);

/// How long to wait between attempts and when to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Fixed delay before every retry
    #[serde(rename = "backoff_ms", with = "millis", default = "default_backoff")]
    pub backoff: Duration,

    /// Total attempts allowed; `None` retries forever
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
}

fn default_backoff() -> Duration {
    DEFAULT_BACKOFF
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(DEFAULT_BACKOFF)
    }
}

impl RetryPolicy {
    /// Unbounded retries with a fixed delay
    pub const fn fixed(backoff: Duration) -> Self {
        Self {
            backoff,
            max_attempts: None,
        }
    }

    /// Unbounded retries with no delay
    ///
    /// The waiting thread still yields between attempts.
    pub const fn immediate() -> Self {
        Self::fixed(Duration::ZERO)
    }

    /// Bound the total number of attempts (at least one is always made)
    pub const fn with_max_attempts(self, attempts: u32) -> Self {
        Self {
            max_attempts: Some(attempts),
            ..self
        }
    }

    /// Whether attempt number `attempt` (1-based) may be made
    pub fn allows(&self, attempt: u32) -> bool {
        match self.max_attempts {
            None => true,
            Some(max) => attempt <= max.max(1),
        }
    }

    /// Wait before the next attempt
    pub fn pause(&self) {
        if self.backoff.is_zero() {
            std::thread::yield_now();
        } else {
            std::thread::sleep(self.backoff);
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
