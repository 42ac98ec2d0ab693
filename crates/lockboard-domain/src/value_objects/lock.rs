//! Lock value objects

use serde::{Deserialize, Serialize};

/// Lock guard token returned when a lock is acquired
///
/// The token is exactly the value written to the lock record, so it can be
/// used for a compare-then-delete release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockGuard {
    /// Lock key
    pub key: String,
    /// Unique token for this lock acquisition
    pub token: String,
}

impl LockGuard {
    /// Create a guard for `key` holding `token`
    pub fn new<K: Into<String>, T: Into<String>>(key: K, token: T) -> Self {
        Self {
            key: key.into(),
            token: token.into(),
        }
    }
}

/// How a lock record is created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockMode {
    /// Single conditional write that sets the value and the expiry together.
    /// The record holds a random token.
    #[default]
    Atomic,
    /// Set-if-absent followed by a separate expire call. The record holds
    /// the absolute expiry timestamp (epoch milliseconds) so that a record
    /// orphaned between the two calls can be stolen once the timestamp has
    /// passed. Both the two-step create and the steal are racy.
    Legacy,
}

impl std::fmt::Display for LockMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atomic => write!(f, "atomic"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

impl std::str::FromStr for LockMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "atomic" => Ok(Self::Atomic),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("Unknown lock mode: {other}. Use atomic or legacy")),
        }
    }
}
