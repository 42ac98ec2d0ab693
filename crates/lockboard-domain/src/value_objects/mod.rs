//! Value Objects
//!
//! Immutable types passed between the application layer and the store port.

/// Leaderboard entries and sorted-set pairs
pub mod leaderboard;
/// Lock guards and lock creation modes
pub mod lock;

pub use leaderboard::{LeaderboardEntry, ScoredMember};
pub use lock::{LockGuard, LockMode};
