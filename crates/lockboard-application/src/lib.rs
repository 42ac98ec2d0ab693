//! Application Layer - lockboard
//!
//! Implements the lock, leaderboard, counter and cache use cases on top of the
//! [`KeyValueStore`](lockboard_domain::ports::KeyValueStore) port.
//!
//! ## Use Cases
//!
//! - [`LockManager`]: acquire / retry / release a named lock
//! - [`Leaderboard`]: increment scores and read a collection highest-first
//! - [`Counters`]: atomic counters with optional expiry windows
//! - [`Cache`]: string and JSON values with an optional lifetime
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `lockboard-domain`: for the store port, errors and value objects
//! - Pure Rust libraries for serialization, tokens and time
//!
//! Calls are blocking; share one instance of each service between threads.

pub mod use_cases;

pub use use_cases::*;
