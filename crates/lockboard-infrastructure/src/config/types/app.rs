//! Main application configuration

use super::{LockConfig, LoggingConfig, StoreConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key-value store connection
    pub store: StoreConfig,

    /// Lock defaults
    pub lock: LockConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}
