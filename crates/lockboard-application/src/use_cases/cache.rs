//! Cache Use Case
//!
//! Plain string values with an optional lifetime, plus JSON-encoded records.
//! A value stored without a TTL is permanent until overwritten or removed.

use crate::use_cases::validation::{require_non_empty, require_positive_ttl};
use lockboard_domain::error::Result;
use lockboard_domain::ports::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// String cache over the key-value store
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<dyn KeyValueStore>,
}

impl Cache {
    /// Create a cache backed by `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Store `value`, replacing any previous value and lifetime
    ///
    /// `ttl` of `None` keeps the value until it is overwritten or removed.
    pub fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        require_non_empty("cache key", key)?;
        if let Some(ttl) = ttl {
            require_positive_ttl(ttl)?;
        }
        self.store.set(key, value, ttl)?;
        debug!(key, permanent = ttl.is_none(), "Cached value");
        Ok(())
    }

    /// Cached value; `None` when absent or expired
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        require_non_empty("cache key", key)?;
        self.store.get(key)
    }

    /// Drop a cached value
    ///
    /// # Returns
    /// True if a value was present
    pub fn remove(&self, key: &str) -> Result<bool> {
        require_non_empty("cache key", key)?;
        self.store.delete(key)
    }

    /// Remaining lifetime; `None` when absent or permanent
    pub fn time_to_live(&self, key: &str) -> Result<Option<Duration>> {
        require_non_empty("cache key", key)?;
        self.store.time_to_live(key)
    }

    /// [`put`](Self::put) for a record stored as JSON
    pub fn put_record<T: Serialize>(
        &self,
        key: &str,
        record: &T,
        ttl: Option<Duration>,
    ) -> Result<()> {
        let encoded = serde_json::to_string(record)?;
        self.put(key, &encoded, ttl)
    }

    /// [`get`](Self::get) with the value decoded from JSON
    pub fn get_record<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.get(key)?
            .map(|raw| -> Result<T> { Ok(serde_json::from_str(&raw)?) })
            .transpose()
    }
}
