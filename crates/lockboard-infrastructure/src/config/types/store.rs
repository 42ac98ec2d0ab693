//! Store configuration types

use lockboard_providers::constants::{
    REDIS_DEFAULT_CONNECTION_TIMEOUT_MS, REDIS_DEFAULT_POOL_SIZE, REDIS_DEFAULT_URL,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Store providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreProvider {
    /// Distributed store (Redis)
    Redis,
    /// In-process store
    Memory,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store provider
    pub provider: StoreProvider,

    /// Redis URL (for Redis provider)
    pub redis_url: String,

    /// Redis connection pool size
    pub pool_size: u32,

    /// How long a command waits for a pooled connection, in milliseconds
    pub connection_timeout_ms: u64,
}

impl StoreConfig {
    /// Connection checkout timeout as a `Duration`
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_millis(self.connection_timeout_ms)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: StoreProvider::Redis,
            redis_url: REDIS_DEFAULT_URL.to_string(),
            pool_size: REDIS_DEFAULT_POOL_SIZE,
            connection_timeout_ms: REDIS_DEFAULT_CONNECTION_TIMEOUT_MS,
        }
    }
}
