//! Top-level configuration.
//!
//! One TOML document configures both the store and the locks built on it.
//! Every field has a default, so an empty document is valid:
//!
//! ```toml
//! [store]
//! backend = "sharded"
//! shards = 16
//!
//! [lock.retry]
//! backoff_ms = 10
//! ```

use occlock_client::KvClient;
use occlock_engine::{Backend, ConfigError, KvServer, StoreConfig};
use occlock_lock::{Lock, LockConfig, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Store and lock configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Store backend selection
    #[serde(default)]
    pub store: StoreConfig,

    /// Lock retry behaviour
    #[serde(default)]
    pub lock: LockConfig,
}

impl Config {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Converts configuration to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate()
    }

    /// Creates a builder for configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Builds a server with the configured backend.
    pub fn server(&self) -> KvServer {
        KvServer::new(&self.store)
    }

    /// Creates a lock using the configured retry policy.
    pub fn new_lock<C: KvClient>(&self, client: C, name: impl Into<String>) -> Lock<C> {
        Lock::new(client, name).with_policy(self.lock.retry)
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Sets the store backend.
    pub fn backend(mut self, backend: Backend) -> Self {
        self.config.store.backend = backend;
        self
    }

    /// Uses the sharded backend with the given shard count.
    pub fn sharded(mut self, shards: usize) -> Self {
        self.config.store.backend = Backend::Sharded;
        self.config.store.shards = shards;
        self
    }

    /// Sets the lock retry policy.
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.config.lock.retry = policy;
        self
    }

    /// Validates and builds the configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
