//! Use Cases
//!
//! The store-backed services. Each holds an `Arc<dyn KeyValueStore>`
//! and is independent of the others.

pub mod cache;
pub mod counters;
pub mod leaderboard;
pub mod lock_manager;
mod validation;

pub use cache::Cache;
pub use counters::Counters;
pub use leaderboard::Leaderboard;
pub use lock_manager::{LockManager, RetryPolicy};
