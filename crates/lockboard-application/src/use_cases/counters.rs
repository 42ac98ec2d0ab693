//! Counter Use Case
//!
//! Atomic integer counters: stock that many buyers decrement at once, and
//! per-window hit counters for throttling.

use crate::use_cases::validation::{require_non_empty, require_positive_ttl};
use lockboard_domain::error::{Error, Result};
use lockboard_domain::ports::KeyValueStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Integer counters stored as decimal strings
#[derive(Debug, Clone)]
pub struct Counters {
    store: Arc<dyn KeyValueStore>,
}

impl Counters {
    /// Create counters backed by `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Overwrite the counter with `value`, clearing any expiry
    pub fn set(&self, key: &str, value: i64) -> Result<()> {
        require_non_empty("counter key", key)?;
        self.store.set(key, &value.to_string(), None)
    }

    /// Current value; `None` when the counter does not exist
    pub fn get(&self, key: &str) -> Result<Option<i64>> {
        require_non_empty("counter key", key)?;
        self.store
            .get(key)?
            .map(|raw| {
                raw.parse::<i64>().map_err(|_| {
                    Error::store(format!("Counter {key} holds a non-integer value: {raw}"))
                })
            })
            .transpose()
    }

    /// Add one
    pub fn increment(&self, key: &str) -> Result<i64> {
        self.increment_by(key, 1)
    }

    /// Subtract one; may go below zero
    pub fn decrement(&self, key: &str) -> Result<i64> {
        self.increment_by(key, -1)
    }

    /// Add `delta` atomically; a missing counter starts at 0
    pub fn increment_by(&self, key: &str, delta: i64) -> Result<i64> {
        require_non_empty("counter key", key)?;
        self.store.increment_by(key, delta)
    }

    /// Add one, starting a `ttl` window when this is the first hit
    ///
    /// The increment and the expiry are two store calls; if the process dies
    /// between them the counter never expires.
    pub fn increment_with_expiry(&self, key: &str, ttl: Duration) -> Result<i64> {
        require_non_empty("counter key", key)?;
        require_positive_ttl(ttl)?;

        let value = self.store.increment_by(key, 1)?;
        if value == 1 {
            self.store.expire(key, ttl)?;
            let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
            debug!(counter = key, ttl_ms, "Counter window started");
        }
        Ok(value)
    }

    /// Remaining lifetime of the counter; `None` when absent or without expiry
    pub fn time_to_live(&self, key: &str) -> Result<Option<Duration>> {
        require_non_empty("counter key", key)?;
        self.store.time_to_live(key)
    }
}
