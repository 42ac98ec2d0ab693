//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the application layer. Infrastructure-specific constants remain in
//! `lockboard_infrastructure::constants`.

// ============================================================================
// LOCK DOMAIN CONSTANTS
// ============================================================================

/// Default lock time to live in milliseconds (60 seconds)
pub const LOCK_DEFAULT_TTL_MS: u64 = 60_000;

/// Default number of attempts made by a retrying acquisition
pub const LOCK_DEFAULT_RETRY_ATTEMPTS: u32 = 6;

/// Default pause between retrying acquisition attempts in milliseconds
pub const LOCK_DEFAULT_RETRY_BACKOFF_MS: u64 = 1_000;

// ============================================================================
// LEADERBOARD DOMAIN CONSTANTS
// ============================================================================

/// First rank of a full descending read
pub const LEADERBOARD_FIRST_RANK: isize = 0;

/// Last rank of a full descending read (the lowest-scored member)
pub const LEADERBOARD_LAST_RANK: isize = -1;
