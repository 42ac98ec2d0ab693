//! Provider-specific constants

/// Default Redis connection URL
pub const REDIS_DEFAULT_URL: &str = "redis://localhost:6379";

/// Default maximum number of pooled Redis connections
pub const REDIS_DEFAULT_POOL_SIZE: u32 = 10;

/// Default wait for a pooled Redis connection in milliseconds
pub const REDIS_DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 2_000;

/// Delete `KEYS[1]` only while it still holds `ARGV[1]`
pub const COMPARE_AND_DELETE_SCRIPT: &str = r#"
if redis.call("GET", KEYS[1]) == ARGV[1] then
    return redis.call("DEL", KEYS[1])
else
    return 0
end
"#;
