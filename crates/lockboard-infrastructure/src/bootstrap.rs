//! Application bootstrap
//!
//! Composition root: one store shared by the lock manager, the leaderboard,
//! the counters and the cache.
//!
//! ```text
//! AppConfig → StoreFactory → Arc<dyn KeyValueStore> → LockManager
//!                                                    → Leaderboard
//!                                                    → Counters
//!                                                    → Cache
//! ```

use crate::config::AppConfig;
use crate::factory::StoreFactory;
use lockboard_application::{Cache, Counters, Leaderboard, LockManager};
use lockboard_domain::error::Result;
use lockboard_domain::ports::KeyValueStore;
use std::sync::Arc;
use tracing::info;

/// Application context holding configuration and wired services
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    store: Arc<dyn KeyValueStore>,
    locks: LockManager,
    leaderboard: Leaderboard,
    counters: Counters,
    cache: Cache,
}

impl AppContext {
    /// Wire services over an existing store
    pub fn with_store(config: AppConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let locks = LockManager::with_mode(Arc::clone(&store), config.lock.mode);
        let leaderboard = Leaderboard::new(Arc::clone(&store));
        let counters = Counters::new(Arc::clone(&store));
        let cache = Cache::new(Arc::clone(&store));
        Self {
            config: Arc::new(config),
            store,
            locks,
            leaderboard,
            counters,
            cache,
        }
    }

    /// Shared store
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }

    /// Lock manager configured with the lock mode from config
    pub fn locks(&self) -> &LockManager {
        &self.locks
    }

    /// Leaderboard
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Counters
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// String cache
    pub fn cache(&self) -> &Cache {
        &self.cache
    }
}

/// Create the store from `config` and wire the application services
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let store = StoreFactory::create(&config.store)?;
    info!(
        provider = store.provider_name(),
        lock_mode = %config.lock.mode,
        "Application context initialized"
    );
    Ok(AppContext::with_store(config, store))
}
