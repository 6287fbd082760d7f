//! Distributed spin lock for occlock
//!
//! A [`Lock`] is a named key in a versioned store. Any number of clients,
//! each holding its own `Lock` for the same name, get mutual exclusion
//! through the store's conditional write alone.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use occlock_client::LocalClient;
//! use occlock_engine::KvServer;
//! use occlock_lock::Lock;
//!
//! let server = Arc::new(KvServer::default());
//! let a = Lock::new(LocalClient::new(Arc::clone(&server)), "l");
//! let b = Lock::new(LocalClient::new(server), "l");
//!
//! let guard = a.lock().unwrap();
//! assert!(!b.try_acquire());
//! drop(guard);
//! assert!(b.try_acquire());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod lock;
pub mod retry;

pub use config::LockConfig;
pub use error::{LockError, Result};
pub use lock::{Lock, LockGuard, ReleaseOutcome, UNLOCKED};
pub use retry::{RetryPolicy, DEFAULT_BACKOFF};
