//! # lockboard - Store Implementations
//!
//! This crate contains the user-selectable implementations of the
//! [`KeyValueStore`] port defined in `lockboard-domain`.
//!
//! ## Feature Flags
//!
//! Each store can be enabled/disabled via feature flags for minimal builds:
//!
//! ```toml
//! [dependencies]
//! lockboard-providers = { version = "0.1", default-features = false, features = ["store-memory"] }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use lockboard_providers::store::{InMemoryStore, RedisStore};
//! ```

// Re-export lockboard-domain types commonly used with stores
pub use lockboard_domain::error::{Error, Result};
pub use lockboard_domain::ports::KeyValueStore;

/// Provider-specific constants
pub mod constants;

/// Key-value store implementations
///
/// Implements `KeyValueStore` for in-memory and Redis backends.
pub mod store;
