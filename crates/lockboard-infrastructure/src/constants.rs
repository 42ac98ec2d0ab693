//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `lockboard_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "lockboard.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "lockboard";

/// Environment variable prefix for configuration (`LOCKBOARD__STORE__PROVIDER`)
pub const CONFIG_ENV_PREFIX: &str = "LOCKBOARD";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "LOCKBOARD_LOG";

/// File name prefix of rolled log files
pub const LOG_FILE_PREFIX: &str = "lockboard";

// ============================================================================
// HEALTH CHECK CONSTANTS
// ============================================================================

/// Key written and removed by the store round-trip check
pub const HEALTH_CHECK_KEY: &str = "lockboard:health:check";

/// Lifetime of the health check key, in case the delete never lands
pub const HEALTH_CHECK_TTL_MS: u64 = 5_000;
