//! Core types and traits for occlock
//!
//! This crate defines the foundational types used throughout the system:
//! - Version: Per-key version counter
//! - Entry: Stored (value, version) pair and the conditional-write decision
//! - StoreError / Error: outcome taxonomy (NoKey, Version, and Transport at
//!   the client boundary)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entry;
pub mod error;
pub mod types;

pub use entry::Entry;
pub use error::{Error, Result, StoreError, StoreResult};
pub use types::Version;
