//! Redis key-value store
//!
//! Distributed implementation of [`KeyValueStore`] using Redis as the backend.
//! Suitable for multi-instance deployments: every process pointing at the same
//! Redis node sees the same locks, counters and leaderboards.
//!
//! ## Features
//!
//! - Blocking connections checked out of an r2d2 pool
//! - `SET NX PX` for atomic create-with-expiry
//! - Lua compare-then-delete for token-verified release
//! - `ZINCRBY` / `ZREVRANGE WITHSCORES` for leaderboards
//!
//! ## Example
//!
//! ```ignore
//! use lockboard_providers::store::RedisStore;
//!
//! let store = RedisStore::new("redis://localhost:6379")?;
//! assert_eq!(store.server_address(), "localhost:6379");
//! ```

use crate::constants::{
    COMPARE_AND_DELETE_SCRIPT, REDIS_DEFAULT_CONNECTION_TIMEOUT_MS, REDIS_DEFAULT_POOL_SIZE,
};
use lockboard_domain::error::{Error, Result};
use lockboard_domain::ports::KeyValueStore;
use lockboard_domain::value_objects::ScoredMember;
use r2d2::{Pool, PooledConnection};
use redis::{Client, FromRedisValue, RedisError};
use std::time::Duration;
use tracing::debug;

/// Classify a Redis failure as connectivity or command error
pub fn map_redis_error(command: &str, e: RedisError) -> Error {
    let message = format!("Redis {command} failed: {e}");
    if e.is_io_error() || e.is_timeout() || e.is_connection_dropped() || e.is_connection_refusal()
    {
        Error::store_unavailable_with_source(message, e)
    } else {
        Error::store_with_source(message, e)
    }
}

/// Whole milliseconds of `ttl`, never below 1 (Redis rejects `PX 0`)
fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

/// Host part of a connection string, without credentials
fn redact(connection_string: &str) -> String {
    let without_scheme = connection_string
        .split_once("://")
        .map_or(connection_string, |(_, rest)| rest);
    without_scheme
        .rsplit_once('@')
        .map_or(without_scheme, |(_, host)| host)
        .to_string()
}

/// Redis key-value store
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Clone)]
pub struct RedisStore {
    pool: Pool<Client>,
    server: String,
}

impl RedisStore {
    /// Create a new Redis store with connection string and default pool settings
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// No connection is opened until the first command.
    pub fn new(connection_string: &str) -> Result<Self> {
        Self::with_pool_config(
            connection_string,
            REDIS_DEFAULT_POOL_SIZE,
            Duration::from_millis(REDIS_DEFAULT_CONNECTION_TIMEOUT_MS),
        )
    }

    /// Create a new Redis store with explicit pool settings
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL
    /// * `pool_size` - Maximum number of pooled connections (must be non-zero)
    /// * `connection_timeout` - How long a command waits for a pooled connection
    pub fn with_pool_config(
        connection_string: &str,
        pool_size: u32,
        connection_timeout: Duration,
    ) -> Result<Self> {
        if pool_size == 0 {
            return Err(Error::configuration("Redis pool size cannot be 0"));
        }

        let client = Client::open(connection_string).map_err(|e| {
            Error::configuration_with_source(format!("Failed to create Redis client: {}", e), e)
        })?;

        let pool = Pool::builder()
            .max_size(pool_size)
            .min_idle(Some(0))
            .connection_timeout(connection_timeout)
            .build_unchecked(client);

        let server = redact(connection_string);
        debug!(server = %server, pool_size, "Redis store created");

        Ok(Self { pool, server })
    }

    /// Get the Redis server address description
    pub fn server_address(&self) -> &str {
        &self.server
    }

    /// Maximum number of pooled connections
    pub fn pool_size(&self) -> u32 {
        self.pool.max_size()
    }

    /// Get a connection from the pool
    fn connection(&self) -> Result<PooledConnection<Client>> {
        self.pool.get().map_err(|e| {
            Error::store_unavailable_with_source(format!("Failed to get Redis connection: {}", e), e)
        })
    }

    /// Run a single command on a pooled connection
    fn query<T: FromRedisValue>(&self, name: &str, cmd: &redis::Cmd) -> Result<T> {
        let mut conn = self.connection()?;
        cmd.query(&mut *conn).map_err(|e| map_redis_error(name, e))
    }
}

impl KeyValueStore for RedisStore {
    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if let Some(ttl) = ttl {
            cmd.arg("PX").arg(ttl_millis(ttl));
        }
        self.query("SET", &cmd)
    }

    fn set_if_absent(&self, key: &str, value: &str) -> Result<bool> {
        self.query("SETNX", redis::cmd("SETNX").arg(key).arg(value))
    }

    fn set_if_absent_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<bool> {
        let reply: Option<String> = self.query(
            "SET NX PX",
            redis::cmd("SET")
                .arg(key)
                .arg(value)
                .arg("NX")
                .arg("PX")
                .arg(ttl_millis(ttl)),
        )?;
        Ok(reply.is_some())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        self.query("GET", redis::cmd("GET").arg(key))
    }

    fn get_and_set(&self, key: &str, value: &str) -> Result<Option<String>> {
        self.query("GETSET", redis::cmd("GETSET").arg(key).arg(value))
    }

    fn delete(&self, key: &str) -> Result<bool> {
        let count: i64 = self.query("DEL", redis::cmd("DEL").arg(key))?;
        Ok(count > 0)
    }

    fn delete_if_equals(&self, key: &str, expected: &str) -> Result<bool> {
        let mut conn = self.connection()?;
        let deleted: i64 = redis::Script::new(COMPARE_AND_DELETE_SCRIPT)
            .key(key)
            .arg(expected)
            .invoke(&mut *conn)
            .map_err(|e| map_redis_error("EVALSHA compare-and-delete", e))?;
        Ok(deleted > 0)
    }

    fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        self.query(
            "PEXPIRE",
            redis::cmd("PEXPIRE").arg(key).arg(ttl_millis(ttl)),
        )
    }

    fn time_to_live(&self, key: &str) -> Result<Option<Duration>> {
        let millis: i64 = self.query("PTTL", redis::cmd("PTTL").arg(key))?;
        // -2: no such key, -1: no expiry
        Ok(u64::try_from(millis).ok().map(Duration::from_millis))
    }

    fn increment_by(&self, key: &str, delta: i64) -> Result<i64> {
        self.query("INCRBY", redis::cmd("INCRBY").arg(key).arg(delta))
    }

    fn zset_increment_score(&self, collection: &str, member: &str, delta: f64) -> Result<f64> {
        self.query(
            "ZINCRBY",
            redis::cmd("ZINCRBY").arg(collection).arg(delta).arg(member),
        )
    }

    fn zset_descending_range(
        &self,
        collection: &str,
        start: isize,
        end: isize,
    ) -> Result<Vec<ScoredMember>> {
        self.query(
            "ZREVRANGE",
            redis::cmd("ZREVRANGE")
                .arg(collection)
                .arg(start)
                .arg(end)
                .arg("WITHSCORES"),
        )
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("server", &self.server)
            .field("pool_size", &self.pool.max_size())
            .finish()
    }
}
