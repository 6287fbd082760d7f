//! Store engine for occlock
//!
//! This crate turns a storage backend into a request-handling store:
//! - KvServer: answers get / conditional-put requests
//! - StoreConfig: backend selection, loaded from TOML
//! - ServerStats: request and conflict counters

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod server;
mod stats;

pub use config::{Backend, ConfigError, StoreConfig, StoreConfigBuilder};
pub use server::KvServer;
pub use stats::ServerStats;
