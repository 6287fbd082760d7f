//! Store clients for occlock
//!
//! The lock and any other application code talk to a store only through the
//! [`KvClient`] trait. Two in-process implementations are provided:
//! - LocalClient: direct calls into a `KvServer`
//! - LoopbackClient: same, but every message is encoded and decoded with a
//!   wire `Codec` on the way

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod local;
pub mod traits;

pub use local::{LocalClient, LoopbackClient};
pub use traits::KvClient;
