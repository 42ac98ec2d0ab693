//! Store Factory
//!
//! Turns a [`StoreConfig`] into a shared [`KeyValueStore`]. All store
//! implementations live in `lockboard-providers`; this module only wires them.

use crate::config::{StoreConfig, StoreProvider};
use lockboard_domain::error::Result;
use lockboard_domain::ports::KeyValueStore;
use lockboard_providers::store::{InMemoryStore, RedisStore};
use std::sync::Arc;
use tracing::info;

/// Factory for key-value stores
pub struct StoreFactory;

impl StoreFactory {
    /// Create the store selected by `config`
    ///
    /// Creating a Redis store does not connect; an unreachable server shows up
    /// as `StoreUnavailable` on the first command.
    pub fn create(config: &StoreConfig) -> Result<Arc<dyn KeyValueStore>> {
        let store: Arc<dyn KeyValueStore> = match config.provider {
            StoreProvider::Redis => {
                let redis = RedisStore::with_pool_config(
                    &config.redis_url,
                    config.pool_size,
                    config.connection_timeout(),
                )?;
                info!(
                    server = redis.server_address(),
                    pool_size = redis.pool_size(),
                    "Redis store configured"
                );
                Arc::new(redis)
            }
            StoreProvider::Memory => Arc::new(InMemoryStore::new()),
        };
        info!(provider = store.provider_name(), "Store created");
        Ok(store)
    }
}

/// Shorthand for [`StoreFactory::create`]
pub fn create_store(config: &StoreConfig) -> Result<Arc<dyn KeyValueStore>> {
    StoreFactory::create(config)
}
