//! Store configuration
//!
//! Configuration is plain serde data with defaults for every field, so an
//! empty TOML document is a valid configuration:
//!
//! ```toml
//! backend = "sharded"
//! shards = 16
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Which store implementation backs a server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One mutex around the whole map
    Global,
    /// DashMap with one lock per shard
    #[default]
    Sharded,
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML document is malformed or has wrong field types
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The values are well-formed but not usable
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store implementation
    #[serde(default)]
    pub backend: Backend,

    /// Shard count for the sharded backend (power of two, at least 2)
    #[serde(default = "default_shards")]
    pub shards: usize,
}

fn default_shards() -> usize {
    occlock_storage::DEFAULT_SHARDS
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            shards: default_shards(),
        }
    }
}

impl StoreConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

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
        if self.backend == Backend::Sharded
            && (self.shards < 2 || !self.shards.is_power_of_two())
        {
            return Err(ConfigError::Invalid(format!(
                "shards must be a power of two and at least 2, got {}",
                self.shards
            )));
        }
        Ok(())
    }

    /// Creates a builder for configuration.
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }
}

/// Builder for store configuration.
#[derive(Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend.
    pub fn backend(mut self, backend: Backend) -> Self {
        self.config.backend = backend;
        self
    }

    /// Uses the single-mutex backend.
    pub fn global(self) -> Self {
        self.backend(Backend::Global)
    }

    /// Uses the sharded backend with the given shard count.
    pub fn sharded(mut self, shards: usize) -> Self {
        self.config.backend = Backend::Sharded;
        self.config.shards = shards;
        self
    }

    /// Validates and builds the configuration.
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
