//! In-process clients
//!
//! - [`LocalClient`] calls the server's handlers directly with wire structs.
//! - [`LoopbackClient`] encodes every request with a [`Codec`], hands the
//!   bytes to the server and decodes the reply, exercising the same path a
//!   real transport would take.

use crate::traits::KvClient;
use occlock_core::{Error, Result, Version};
use occlock_engine::KvServer;
use occlock_wire::{Codec, GetArgs, PutArgs, Request, Response};
use std::sync::Arc;
use tracing::warn;

/// Client that calls a server in the same process
#[derive(Clone)]
pub struct LocalClient {
    server: Arc<KvServer>,
}

impl LocalClient {
    /// Create a client for `server`
    pub fn new(server: Arc<KvServer>) -> Self {
        Self { server }
    }

    /// Server this client talks to
    pub fn server(&self) -> &Arc<KvServer> {
        &self.server
    }
}

impl KvClient for LocalClient {
    fn get(&self, key: &str) -> Result<(String, Version)> {
        let reply = self.server.get(&GetArgs::new(key));
        Ok(reply.into_result()?)
    }

    fn put(&self, key: &str, value: &str, expected: Version) -> Result<()> {
        let reply = self.server.put(&PutArgs::new(key, value, expected));
        Ok(reply.into_result()?)
    }
}

impl std::fmt::Debug for LocalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalClient").finish_non_exhaustive()
    }
}

/// Client that round-trips every request through a codec
#[derive(Clone)]
pub struct LoopbackClient {
    server: Arc<KvServer>,
    codec: Codec,
}

impl LoopbackClient {
    /// Create a client for `server` using `codec`
    pub fn new(server: Arc<KvServer>, codec: Codec) -> Self {
        Self { server, codec }
    }

    /// Codec used for both directions
    pub fn codec(&self) -> Codec {
        self.codec
    }

    fn call(&self, request: Request) -> Result<Response> {
        let bytes = self.codec.encode_request(&request)?;
        let reply = self.server.handle_bytes(self.codec, &bytes).map_err(|e| {
            warn!(key = request.key(), codec = %self.codec, error = %e, "Request failed");
            Error::from(e)
        })?;
        Ok(self.codec.decode_response(&reply)?)
    }
}

impl KvClient for LoopbackClient {
    fn get(&self, key: &str) -> Result<(String, Version)> {
        match self.call(Request::Get(GetArgs::new(key)))? {
            Response::Get(reply) => Ok(reply.into_result()?),
            Response::Put(_) => Err(Error::Transport("put reply to get request".into())),
        }
    }

    fn put(&self, key: &str, value: &str, expected: Version) -> Result<()> {
        match self.call(Request::Put(PutArgs::new(key, value, expected)))? {
            Response::Put(reply) => Ok(reply.into_result()?),
            Response::Get(_) => Err(Error::Transport("get reply to put request".into())),
        }
    }
}

impl std::fmt::Debug for LoopbackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopbackClient")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}
