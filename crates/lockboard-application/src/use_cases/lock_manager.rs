//! Lock Manager Use Case
//!
//! Best-effort, single-node mutual exclusion over a [`KeyValueStore`].
//!
//! A lock is a store record keyed by the lock name. It is either ABSENT or
//! HELD; it becomes ABSENT again on [`LockManager::release`] or when the store
//! expires it. There is no lease renewal: a crashed holder is recovered only
//! by the TTL.
//!
//! Exclusion comes entirely from the store's conditional write. Nothing in
//! this module synchronizes callers, so one manager can be shared by any
//! number of threads.
//!
//! ## Failure policy
//!
//! Store failures during acquisition are logged and reported as "not
//! acquired". Invalid arguments are rejected before the store is touched.
//! [`LockManager::release`] propagates store failures.

use crate::use_cases::validation::{require_non_empty, require_positive_ttl};
use chrono::Utc;
use lockboard_domain::constants::{LOCK_DEFAULT_RETRY_ATTEMPTS, LOCK_DEFAULT_RETRY_BACKOFF_MS};
use lockboard_domain::error::{Error, Result};
use lockboard_domain::ports::KeyValueStore;
use lockboard_domain::value_objects::{LockGuard, LockMode};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Attempt-bounded retry schedule for contended locks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of acquisition attempts (at least 1)
    pub max_attempts: u32,
    /// Pause between two consecutive attempts
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Create a retry policy
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: LOCK_DEFAULT_RETRY_ATTEMPTS,
            backoff: Duration::from_millis(LOCK_DEFAULT_RETRY_BACKOFF_MS),
        }
    }
}

/// Distributed lock manager
///
/// # Example
///
/// ```ignore
/// let locks = LockManager::new(store);
/// if locks.acquire("resource-A", Duration::from_secs(5))? {
///     // critical section
///     locks.release("resource-A")?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LockManager {
    store: Arc<dyn KeyValueStore>,
    mode: LockMode,
}

impl LockManager {
    /// Create a lock manager using the atomic create-with-expiry path
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_mode(store, LockMode::Atomic)
    }

    /// Create a lock manager with an explicit creation mode
    pub fn with_mode(store: Arc<dyn KeyValueStore>, mode: LockMode) -> Self {
        Self { store, mode }
    }

    /// The creation mode in use
    pub fn mode(&self) -> LockMode {
        self.mode
    }

    /// Try once to take the lock `name` for `ttl`
    ///
    /// # Returns
    /// `Ok(true)` iff this call created (or, in legacy mode, stole) the lock
    /// record. Store failures yield `Ok(false)`.
    ///
    /// # Errors
    /// `InvalidArgument` for an empty name or a zero TTL.
    pub fn acquire(&self, name: &str, ttl: Duration) -> Result<bool> {
        Ok(self.try_lock(name, ttl)?.is_some())
    }

    /// Like [`acquire`](Self::acquire), returning the guard holding the stored token
    pub fn try_lock(&self, name: &str, ttl: Duration) -> Result<Option<LockGuard>> {
        require_non_empty("lock name", name)?;
        require_positive_ttl(ttl)?;

        let attempt = match self.mode {
            LockMode::Atomic => self.create_atomic(name, ttl),
            LockMode::Legacy => self.create_legacy(name, ttl),
        };

        match attempt {
            Ok(Some(guard)) => {
                debug!(lock = name, mode = %self.mode, "Lock acquired");
                Ok(Some(guard))
            }
            Ok(None) => {
                debug!(lock = name, "Lock is held elsewhere");
                Ok(None)
            }
            Err(e) => {
                error!(lock = name, error = %e, "Lock acquisition failed");
                Ok(None)
            }
        }
    }

    /// Call [`acquire`](Self::acquire) up to `max_attempts` times, sleeping
    /// `backoff` between attempts
    ///
    /// # Errors
    /// `InvalidArgument` for `max_attempts == 0` or invalid lock arguments.
    pub fn retry_acquire(
        &self,
        name: &str,
        ttl: Duration,
        max_attempts: u32,
        backoff: Duration,
    ) -> Result<bool> {
        Ok(self
            .try_lock_with_retry(name, ttl, RetryPolicy::new(max_attempts, backoff))?
            .is_some())
    }

    /// Retry [`try_lock`](Self::try_lock) according to `policy`
    pub fn try_lock_with_retry(
        &self,
        name: &str,
        ttl: Duration,
        policy: RetryPolicy,
    ) -> Result<Option<LockGuard>> {
        if policy.max_attempts == 0 {
            return Err(Error::invalid_argument("max_attempts must be at least 1"));
        }

        for attempt in 1..=policy.max_attempts {
            if let Some(guard) = self.try_lock(name, ttl)? {
                return Ok(Some(guard));
            }
            if attempt < policy.max_attempts {
                debug!(
                    lock = name,
                    attempt,
                    max_attempts = policy.max_attempts,
                    "Lock busy, backing off"
                );
                thread::sleep(policy.backoff);
            }
        }

        debug!(lock = name, attempts = policy.max_attempts, "Gave up on lock");
        Ok(None)
    }

    /// Delete the lock record unconditionally
    ///
    /// Does not check who holds the lock: any caller knowing the name can
    /// release any holder's lock. Use [`release_guard`](Self::release_guard)
    /// for a token-checked release. Releasing an absent lock is not an error.
    pub fn release(&self, name: &str) -> Result<()> {
        require_non_empty("lock name", name)?;
        let existed = self.store.delete(name)?;
        debug!(lock = name, existed, "Lock released");
        Ok(())
    }

    /// Delete the lock record only while it still holds `guard`'s token
    ///
    /// # Returns
    /// True if the lock was still held by this guard and is now released.
    pub fn release_guard(&self, guard: &LockGuard) -> Result<bool> {
        require_non_empty("lock name", &guard.key)?;
        let released = self.store.delete_if_equals(&guard.key, &guard.token)?;
        if released {
            debug!(lock = %guard.key, "Lock released by holder");
        } else {
            warn!(lock = %guard.key, "Guard no longer holds the lock");
        }
        Ok(released)
    }

    fn create_atomic(&self, name: &str, ttl: Duration) -> Result<Option<LockGuard>> {
        let token = Uuid::new_v4().to_string();
        let created = self.store.set_if_absent_with_ttl(name, &token, ttl)?;
        Ok(created.then(|| LockGuard::new(name, token)))
    }

    fn create_legacy(&self, name: &str, ttl: Duration) -> Result<Option<LockGuard>> {
        let now = Utc::now().timestamp_millis();
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let expiry = now.saturating_add(ttl_ms).to_string();

        if self.store.set_if_absent(name, &expiry)? {
            // A crash before this call leaves the record without a TTL.
            self.store.expire(name, ttl)?;
            return Ok(Some(LockGuard::new(name, expiry)));
        }

        let Some(current) = self.store.get(name)? else {
            return Ok(None);
        };
        let Ok(current_expiry) = current.parse::<i64>() else {
            warn!(lock = name, value = %current, "Lock record is not an expiry timestamp");
            return Ok(None);
        };
        if current_expiry >= now {
            return Ok(None);
        }

        // Optimistic steal: another caller may replace the value between the
        // GET above and this GETSET, in which case both writes land and only
        // the caller that saw the old value wins.
        let previous = self.store.get_and_set(name, &expiry)?;
        if previous.as_deref() != Some(current.as_str()) {
            return Ok(None);
        }
        self.store.expire(name, ttl)?;
        warn!(lock = name, expired_at = current_expiry, "Took over expired lock");
        Ok(Some(LockGuard::new(name, expiry)))
    }
}
