//! # occlock
//!
//! A versioned key-value store with optimistic concurrency control, and a
//! distributed spin lock built on nothing but that store's conditional write.
//!
//! ## Quick Start
//!
//! ```
//! use occlock::prelude::*;
//! use std::sync::Arc;
//!
//! let config = Config::default();
//! let server = Arc::new(config.server());
//! let client = LocalClient::new(Arc::clone(&server));
//!
//! // Conditional writes: version 0 creates, version n updates
//! client.put("x", "a", Version::ZERO)?;
//! let (value, version) = client.get("x")?;
//! assert_eq!((value.as_str(), version), ("a", Version::FIRST));
//!
//! // A lock is just a key in the same store
//! let lock = config.new_lock(LocalClient::new(server), "jobs");
//! let guard = lock.lock()?;
//! drop(guard);
//! # Ok::<(), occlock::Error>(())
//! ```
//!
//! ## Crates
//!
//! - [`occlock_core`]: `Version`, `Entry` and the put decision table
//! - [`occlock_storage`]: `GlobalStore` and `ShardedStore` backends
//! - [`occlock_wire`]: request and reply messages, JSON and MessagePack codecs
//! - [`occlock_engine`]: `KvServer` and store configuration
//! - [`occlock_client`]: the `KvClient` interface and in-process clients
//! - [`occlock_lock`]: `Lock`, `LockGuard` and `RetryPolicy`

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;

pub mod prelude;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};

// Re-export main types
pub use occlock_client::{KvClient, LocalClient, LoopbackClient};
pub use occlock_core::{Entry, Version};
pub use occlock_engine::{Backend, KvServer, ServerStats, StoreConfig};
pub use occlock_lock::{Lock, LockConfig, LockGuard, ReleaseOutcome, RetryPolicy};
pub use occlock_storage::{GlobalStore, KeyedStore, ShardedStore};
pub use occlock_wire::Codec;
