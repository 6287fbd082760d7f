//! Store server
//!
//! `KvServer` is the request-handling side of a store. It answers
//! [`GetArgs`] and [`PutArgs`] against a [`KeyedStore`] and knows nothing about
//! how the requests arrived. A transport hands it decoded messages (or raw
//! bytes plus a [`Codec`]) and sends back whatever it returns.
//!
//! Every request is one bounded, non-blocking step inside the exclusion
//! region the store uses for the key.

use crate::config::{Backend, StoreConfig};
use crate::stats::{Counters, ServerStats};
use occlock_storage::{GlobalStore, KeyedStore, ShardedStore};
use occlock_wire::{
    Codec, GetArgs, GetReply, PutArgs, PutReply, Request, Response, Status, WireResult,
};
use std::sync::Arc;
use tracing::{debug, trace};

/// Versioned key-value server
///
/// # Example
///
/// ```
/// use occlock_core::Version;
/// use occlock_engine::{KvServer, StoreConfig};
/// use occlock_wire::{GetArgs, PutArgs, Status};
///
/// let server = KvServer::new(&StoreConfig::default());
/// let reply = server.put(&PutArgs::new("x", "a", Version::ZERO));
/// assert_eq!(reply.err, Status::Ok);
///
/// let reply = server.get(&GetArgs::new("x"));
/// assert_eq!(reply.value, "a");
/// assert_eq!(reply.version, Version::FIRST);
/// ```
pub struct KvServer {
    store: Arc<dyn KeyedStore>,
    counters: Counters,
}

impl KvServer {
    /// Create a server over the backend named in `config`
    pub fn new(config: &StoreConfig) -> Self {
        let store: Arc<dyn KeyedStore> = match config.backend {
            Backend::Global => Arc::new(GlobalStore::new()),
            Backend::Sharded => Arc::new(ShardedStore::with_shards(config.shards)),
        };
        debug!(backend = ?config.backend, shards = config.shards, "Created store");
        Self::with_store(store)
    }

    /// Create a server over an existing store
    pub fn with_store(store: Arc<dyn KeyedStore>) -> Self {
        Self {
            store,
            counters: Counters::default(),
        }
    }

    /// Underlying store
    pub fn store(&self) -> &Arc<dyn KeyedStore> {
        &self.store
    }

    /// Return the value and version for `args.key`, or `ErrNoKey`
    pub fn get(&self, args: &GetArgs) -> GetReply {
        let result = self.store.get(&args.key);
        self.counters.record_get(result.is_ok());
        let reply = GetReply::from_result(result);
        trace!(key = %args.key, version = %reply.version, err = %reply.err, "get");
        reply
    }

    /// Install `args.value` if `args.version` matches the key's version
    ///
    /// For an absent key the write succeeds only when `args.version` is 0;
    /// otherwise the reply is `ErrNoKey`. A mismatch on an existing key is
    /// `ErrVersion`. Rejected writes leave the store unchanged.
    pub fn put(&self, args: &PutArgs) -> PutReply {
        let result = self.store.put(&args.key, args.value.clone(), args.version);
        let reply = PutReply::from_result(&result);
        self.counters.record_put(reply.err);

        match (&result, reply.err) {
            (Ok(version), _) => {
                trace!(key = %args.key, version = %version, "put applied");
            }
            (Err(_), Status::ErrVersion) => {
                debug!(key = %args.key, expected = %args.version, "put rejected: version mismatch");
            }
            (Err(_), _) => {
                debug!(key = %args.key, expected = %args.version, "put rejected: no such key");
            }
        }
        reply
    }

    /// Dispatch an enveloped request
    pub fn handle(&self, request: Request) -> Response {
        match request {
            Request::Get(args) => Response::Get(self.get(&args)),
            Request::Put(args) => Response::Put(self.put(&args)),
        }
    }

    /// Decode a request, handle it, and encode the response
    pub fn handle_bytes(&self, codec: Codec, bytes: &[u8]) -> WireResult<Vec<u8>> {
        let request = codec.decode_request(bytes)?;
        let response = self.handle(request);
        codec.encode_response(&response)
    }

    /// Snapshot of request counters
    pub fn stats(&self) -> ServerStats {
        self.counters.snapshot()
    }
}

impl Default for KvServer {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}

impl std::fmt::Debug for KvServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvServer")
            .field("entries", &self.store.len())
            .field("stats", &self.stats())
            .finish()
    }
}
