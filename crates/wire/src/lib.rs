//! Wire messages for occlock
//!
//! This crate defines what a transport carries between a store client and a
//! store, without committing to any particular transport:
//!
//! - `GetArgs` / `GetReply` and `PutArgs` / `PutReply`
//! - `Status`: the `OK` / `ErrNoKey` / `ErrVersion` outcome codes
//! - `Request` / `Response`: tagged envelopes for a single channel
//! - `Codec`: JSON and MessagePack byte encodings
//!
//! ## Examples
//!
//! ```
//! use occlock_core::Version;
//! use occlock_wire::{Codec, PutArgs, Request};
//!
//! let request = Request::Put(PutArgs::new("x", "a", Version::ZERO));
//! let bytes = Codec::Json.encode_request(&request).unwrap();
//! assert_eq!(Codec::Json.decode_request(&bytes).unwrap(), request);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod messages;

// Re-export main types
pub use codec::Codec;
pub use error::{WireError, WireResult};
pub use messages::{GetArgs, GetReply, PutArgs, PutReply, Request, Response, Status};
