//! Shared helpers for integration tests
//!
//! Every store-level test runs against each backend, and every client-level
//! test against each way of reaching the server.

#![allow(dead_code)]

use occlock::prelude::*;
use once_cell::sync::Lazy;
use std::sync::Arc;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

/// Install the tracing subscriber once per test binary (`RUST_LOG` filters)
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// One store of each backend
pub fn stores() -> Vec<(&'static str, Arc<dyn KeyedStore>)> {
    vec![
        ("global", Arc::new(GlobalStore::new()) as Arc<dyn KeyedStore>),
        ("sharded", Arc::new(ShardedStore::new()) as Arc<dyn KeyedStore>),
    ]
}

/// One server per backend
pub fn servers() -> Vec<(&'static str, Arc<KvServer>)> {
    stores()
        .into_iter()
        .map(|(name, store)| (name, Arc::new(KvServer::with_store(store))))
        .collect()
}

/// How a client reaches the server
#[derive(Debug, Clone, Copy)]
pub enum Route {
    Direct,
    Loopback(Codec),
}

pub const ROUTES: [Route; 3] = [
    Route::Direct,
    Route::Loopback(Codec::Json),
    Route::Loopback(Codec::MessagePack),
];

/// Build a client of the given kind against `server`
pub fn client(server: &Arc<KvServer>, route: Route) -> Arc<dyn KvClient> {
    match route {
        Route::Direct => Arc::new(LocalClient::new(Arc::clone(server))),
        Route::Loopback(codec) => Arc::new(LoopbackClient::new(Arc::clone(server), codec)),
    }
}

/// Every backend crossed with every client path, each on a fresh server
pub fn setups() -> Vec<(String, Arc<KvServer>, Arc<dyn KvClient>)> {
    let mut out = Vec::new();
    for route in ROUTES {
        for (backend, server) in servers() {
            let kv = client(&server, route);
            out.push((format!("{backend}/{route:?}"), server, kv));
        }
    }
    out
}
