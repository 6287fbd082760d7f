//! Byte encodings for requests and responses
//!
//! Two encodings are supported:
//! - JSON via serde_json (human readable, used for debugging)
//! - MessagePack via rmp-serde, with structs encoded as maps so the
//!   `op` tag survives
//!
//! The encoding is not negotiated; both ends must agree on a [`Codec`].

use crate::error::{WireError, WireResult};
use crate::messages::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Byte encoding used on a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    /// serde_json
    #[default]
    Json,
    /// rmp-serde, named fields
    MessagePack,
}

impl Codec {
    /// Encode a request
    pub fn encode_request(&self, request: &Request) -> WireResult<Vec<u8>> {
        self.encode(request)
    }

    /// Decode a request
    pub fn decode_request(&self, bytes: &[u8]) -> WireResult<Request> {
        self.decode(bytes)
    }

    /// Encode a response
    pub fn encode_response(&self, response: &Response) -> WireResult<Vec<u8>> {
        self.encode(response)
    }

    /// Decode a response
    pub fn decode_response(&self, bytes: &[u8]) -> WireResult<Response> {
        self.decode(bytes)
    }

    fn encode<T: Serialize>(&self, message: &T) -> WireResult<Vec<u8>> {
        match self {
            Codec::Json => {
                serde_json::to_vec(message).map_err(|e| WireError::Encode(e.to_string()))
            }
            Codec::MessagePack => {
                rmp_serde::to_vec_named(message).map_err(|e| WireError::Encode(e.to_string()))
            }
        }
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> WireResult<T> {
        match self {
            Codec::Json => {
                serde_json::from_slice(bytes).map_err(|e| WireError::Decode(e.to_string()))
            }
            Codec::MessagePack => {
                rmp_serde::from_slice(bytes).map_err(|e| WireError::Decode(e.to_string()))
            }
        }
    }
}

impl std::fmt::Display for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Codec::Json => f.write_str("json"),
            Codec::MessagePack => f.write_str("messagepack"),
        }
    }
}
