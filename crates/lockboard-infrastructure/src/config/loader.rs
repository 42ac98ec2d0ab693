//! Configuration loader
//!
//! Loads configuration from default values, a TOML file and environment
//! variables, in that order of precedence (later sources override earlier).

use crate::config::{AppConfig, StoreProvider};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use lockboard_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables, e.g. `LOCKBOARD__STORE__REDIS_URL`
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                debug!(path = %config_path.display(), "Merging configuration file");
            } else {
                warn!(
                    path = %config_path.display(),
                    "Configuration file not found, using defaults and environment"
                );
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            debug!(path = %default_path.display(), "Merging discovered configuration file");
        }

        // Double underscore separates nested keys so field names keep their
        // single underscores (LOCKBOARD__LOCK__DEFAULT_TTL_MS).
        let env_prefix = format!("{CONFIG_ENV_PREFIX}{CONFIG_ENV_SEPARATOR}");
        figment = figment.merge(Env::prefixed(&env_prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).with_config_context(|| {
            format!("Failed to write config file {}", path.as_ref().display())
        })?;

        Ok(())
    }

    /// First existing file among the default configuration locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_store_config(config)?;
    validate_lock_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_store_config(config: &AppConfig) -> Result<()> {
    let store = &config.store;
    if store.provider == StoreProvider::Redis {
        if store.redis_url.trim().is_empty() {
            return Err(Error::configuration(
                "Redis URL cannot be empty when the redis store is selected",
            ));
        }
        if store.pool_size == 0 {
            return Err(Error::configuration("Redis pool size cannot be 0"));
        }
        if store.connection_timeout_ms == 0 {
            return Err(Error::configuration("Redis connection timeout cannot be 0"));
        }
    }
    Ok(())
}

fn validate_lock_config(config: &AppConfig) -> Result<()> {
    if config.lock.default_ttl_ms == 0 {
        return Err(Error::configuration("Default lock TTL cannot be 0"));
    }
    if config.lock.retry_attempts == 0 {
        return Err(Error::configuration("Lock retry attempts cannot be 0"));
    }
    Ok(())
}
