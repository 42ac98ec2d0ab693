//! Lock configuration types

use lockboard_application::RetryPolicy;
use lockboard_domain::constants::{
    LOCK_DEFAULT_RETRY_ATTEMPTS, LOCK_DEFAULT_RETRY_BACKOFF_MS, LOCK_DEFAULT_TTL_MS,
};
use lockboard_domain::value_objects::LockMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lock configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
    /// How lock records are created (atomic or legacy)
    pub mode: LockMode,

    /// Lock time to live when the caller gives none, in milliseconds
    pub default_ttl_ms: u64,

    /// Attempts made by a retrying acquisition
    pub retry_attempts: u32,

    /// Pause between retrying attempts, in milliseconds
    pub retry_backoff_ms: u64,
}

impl LockConfig {
    /// Default lock TTL as a `Duration`
    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }

    /// Retry schedule built from this configuration
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_attempts,
            Duration::from_millis(self.retry_backoff_ms),
        )
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            mode: LockMode::Atomic,
            default_ttl_ms: LOCK_DEFAULT_TTL_MS,
            retry_attempts: LOCK_DEFAULT_RETRY_ATTEMPTS,
            retry_backoff_ms: LOCK_DEFAULT_RETRY_BACKOFF_MS,
        }
    }
}
