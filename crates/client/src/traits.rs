//! Store client interface

use occlock_core::{Result, Version};
use std::sync::Arc;

/// Issues get and conditional-put requests to a store
///
/// Implementations hide how requests reach the store. Store rejections come
/// back as [`occlock_core::Error::NoKey`] and [`occlock_core::Error::Version`];
/// anything that kept a request or its reply from being delivered is
/// [`occlock_core::Error::Transport`].
pub trait KvClient: Send + Sync {
    /// Read `key`, returning its value and version
    fn get(&self, key: &str) -> Result<(String, Version)>;

    /// Write `value` under `key` if the key's current version is `expected`
    fn put(&self, key: &str, value: &str, expected: Version) -> Result<()>;
}

impl<C: KvClient + ?Sized> KvClient for Arc<C> {
    fn get(&self, key: &str) -> Result<(String, Version)> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str, expected: Version) -> Result<()> {
        (**self).put(key, value, expected)
    }
}

impl<C: KvClient + ?Sized> KvClient for &C {
    fn get(&self, key: &str) -> Result<(String, Version)> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str, expected: Version) -> Result<()> {
        (**self).put(key, value, expected)
    }
}
