//! # lockboard Domain Layer
//!
//! Core types shared by every other crate in the workspace:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | `Error` enum and `Result` alias |
//! | [`ports`] | `KeyValueStore` trait implemented by providers |
//! | [`value_objects`] | `LockGuard`, `LockMode`, `LeaderboardEntry` |
//! | [`constants`] | Lock and leaderboard defaults |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::KeyValueStore;
pub use value_objects::{LeaderboardEntry, LockGuard, LockMode, ScoredMember};
