//! Storage layer for occlock
//!
//! This crate implements the in-memory versioned store with:
//! - KeyedStore: the get / conditional-put interface every backend provides
//! - GlobalStore: one mutex around one map (single exclusion region)
//! - ShardedStore: DashMap-backed store, one exclusion region per shard

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod global;
pub mod sharded;
pub mod traits;

pub use global::GlobalStore;
pub use sharded::{ShardedStore, DEFAULT_SHARDS};
pub use traits::KeyedStore;
