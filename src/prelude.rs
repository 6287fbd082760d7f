//! Convenient imports for occlock.
//!
//! ```
//! use occlock::prelude::*;
//! ```

// Configuration and errors
pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{Error, Result};

// Store
pub use occlock_core::{Entry, Version};
pub use occlock_engine::{Backend, KvServer, StoreConfig};
pub use occlock_storage::{GlobalStore, KeyedStore, ShardedStore};

// Clients
pub use occlock_client::{KvClient, LocalClient, LoopbackClient};
pub use occlock_wire::Codec;

// Lock
pub use occlock_lock::{Lock, LockConfig, LockGuard, ReleaseOutcome, RetryPolicy};
