//! # lockboard
//!
//! Best-effort distributed locks, score leaderboards and atomic counters over
//! a Redis-style key-value store.
//!
//! ## Example
//!
//! ```ignore
//! use lockboard::infrastructure::{AppConfig, init_app};
//! use std::time::Duration;
//!
//! let context = init_app(AppConfig::default())?;
//! if context.locks().acquire("resource-A", Duration::from_secs(5))? {
//!     context.leaderboard().increment_score("board", "u1", 10.0)?;
//!     context.locks().release("resource-A")?;
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, the `KeyValueStore` port and value objects
//! - `application` - `LockManager`, `Leaderboard`, `Counters`, `Cache`
//! - `providers` - Redis and in-memory stores
//! - `infrastructure` - configuration, logging, store factory, health check
//! - `cli` / `demo` - the `lockboard` command line tool

/// Domain layer - core types and the store port
pub mod domain {
    pub use lockboard_domain::*;
}

/// Application layer - lock manager, leaderboard, counters and cache
pub mod application {
    pub use lockboard_application::*;
}

/// Store implementations
pub mod providers {
    pub use lockboard_providers::*;
}

/// Infrastructure layer - config, logging and wiring
pub mod infrastructure {
    pub use lockboard_infrastructure::*;
}

pub mod cli;
pub mod demo;

pub use application::{Cache, Counters, Leaderboard, LockManager, RetryPolicy};
pub use domain::{Error, KeyValueStore, LeaderboardEntry, LockGuard, LockMode, Result};
