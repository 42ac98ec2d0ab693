//! Store health check
//!
//! Writes, reads back and deletes a short-lived marker key.

use crate::constants::{HEALTH_CHECK_KEY, HEALTH_CHECK_TTL_MS};
use chrono::{DateTime, Utc};
use lockboard_domain::error::{Error, Result};
use lockboard_domain::ports::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use uuid::Uuid;

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Store answered the round trip correctly
    Up,
    /// Store could not be reached or misbehaved
    Down,
}

impl HealthStatus {
    /// Check if the status indicates the store is healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Up)
    }
}

/// Health check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Name of the checked component
    pub name: String,
    /// Current status
    pub status: HealthStatus,
    /// Timestamp of the check
    pub timestamp: DateTime<Utc>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
    /// Optional error message
    pub error: Option<String>,
}

impl HealthCheck {
    /// Create a successful health check
    pub fn healthy<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Up,
            timestamp: Utc::now(),
            response_time_ms: 0,
            error: None,
        }
    }

    /// Create a failed health check
    pub fn failed<S: Into<String>>(name: S, error: Option<String>) -> Self {
        Self {
            name: name.into(),
            status: HealthStatus::Down,
            timestamp: Utc::now(),
            response_time_ms: 0,
            error,
        }
    }

    /// Set response time
    pub fn with_response_time(mut self, elapsed: Duration) -> Self {
        self.response_time_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self
    }
}

/// Check `store` with a set/get/delete round trip
pub fn check_store(store: &dyn KeyValueStore) -> HealthCheck {
    let started = Instant::now();
    let name = format!("store:{}", store.provider_name());

    let check = match round_trip(store) {
        Ok(()) => HealthCheck::healthy(name),
        Err(e) => HealthCheck::failed(name, Some(e.to_string())),
    }
    .with_response_time(started.elapsed());

    match &check.error {
        None => info!(
            component = %check.name,
            response_time_ms = check.response_time_ms,
            "Store is healthy"
        ),
        Some(error) => warn!(
            component = %check.name,
            response_time_ms = check.response_time_ms,
            error = %error,
            "Store is unhealthy"
        ),
    }
    check
}

fn round_trip(store: &dyn KeyValueStore) -> Result<()> {
    let token = Uuid::new_v4().to_string();
    store.set(
        HEALTH_CHECK_KEY,
        &token,
        Some(Duration::from_millis(HEALTH_CHECK_TTL_MS)),
    )?;
    let read_back = store.get(HEALTH_CHECK_KEY)?;
    store.delete(HEALTH_CHECK_KEY)?;

    if read_back.as_deref() != Some(token.as_str()) {
        return Err(Error::store("Health check read back a different value"));
    }
    Ok(())
}
