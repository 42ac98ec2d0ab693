//! Key-Value Store Port
//!
//! Port for key-value store backends. Supports a distributed backend (Redis)
//! and an in-process backend used for tests and single-node deployments.
//!
//! Every method is a single, independently fallible call. Implementations
//! must make each method atomic with respect to concurrent callers: the lock
//! and leaderboard logic built on this port has no client-side
//! synchronization of its own.

use crate::error::Result;
use crate::value_objects::ScoredMember;
use std::time::Duration;

/// Key-Value Store Port
///
/// Defines the contract for store backends. String values only; numeric
/// values (counters) are stored in their decimal text form.
///
/// # Implementations
///
/// - **Redis**: distributed store shared by many processes
/// - **InMemory**: concurrent in-process store with the same semantics
///
/// # Example
///
/// ```ignore
/// use lockboard_domain::ports::KeyValueStore;
/// use std::time::Duration;
///
/// if store.set_if_absent_with_ttl("lock:job", "token", Duration::from_secs(5))? {
///     // created
/// }
/// ```
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Set a value, replacing any previous value and expiry
    ///
    /// # Arguments
    /// * `key` - The key
    /// * `value` - The value to store
    /// * `ttl` - Optional time to live; `None` stores without expiry
    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()>;

    /// Set a value only if the key does not exist (no expiry)
    ///
    /// # Returns
    /// True if this call created the key
    fn set_if_absent(&self, key: &str, value: &str) -> Result<bool>;

    /// Set a value with an expiry only if the key does not exist
    ///
    /// Creation and expiry assignment happen in one atomic step.
    ///
    /// # Returns
    /// True if this call created the key
    fn set_if_absent_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<bool>;

    /// Get the value stored at `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Atomically replace the value at `key`, returning the previous one
    ///
    /// Clears any expiry on the key.
    fn get_and_set(&self, key: &str, value: &str) -> Result<Option<String>>;

    /// Delete a key
    ///
    /// # Returns
    /// True if the key existed
    fn delete(&self, key: &str) -> Result<bool>;

    /// Atomically delete `key` only when its current value equals `expected`
    ///
    /// # Returns
    /// True if the key was deleted
    fn delete_if_equals(&self, key: &str, expected: &str) -> Result<bool>;

    /// Set the expiry of an existing key
    ///
    /// # Returns
    /// True if the key exists and the expiry was set
    fn expire(&self, key: &str, ttl: Duration) -> Result<bool>;

    /// Remaining time to live of a key
    ///
    /// # Returns
    /// `None` when the key does not exist or has no expiry
    fn time_to_live(&self, key: &str) -> Result<Option<Duration>>;

    /// Atomically add `delta` to the integer stored at `key` (missing counts as 0)
    ///
    /// # Returns
    /// The value after the increment
    fn increment_by(&self, key: &str, delta: i64) -> Result<i64>;

    /// Atomically add `delta` to the score of `member` in a sorted collection
    ///
    /// Creates the collection and the member when absent.
    ///
    /// # Returns
    /// The member's score after the increment
    fn zset_increment_score(&self, collection: &str, member: &str, delta: f64) -> Result<f64>;

    /// Members of a sorted collection between two ranks, highest score first
    ///
    /// Ranks are inclusive and zero-based; negative ranks count from the
    /// lowest-scored end (`-1` is the last member). Members with equal
    /// scores are returned in reverse lexicographic order of their bytes.
    fn zset_descending_range(
        &self,
        collection: &str,
        start: isize,
        end: isize,
    ) -> Result<Vec<ScoredMember>>;

    /// Get the name/identifier of this store implementation
    ///
    /// # Returns
    /// A string identifier for the store (e.g., "redis", "memory")
    fn provider_name(&self) -> &str;
}
