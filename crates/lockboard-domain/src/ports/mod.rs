//! Domain Port Interfaces
//!
//! Boundary contracts implemented by the providers crate. The application
//! layer only ever sees these traits.

/// Key-value store port
pub mod store;

pub use store::KeyValueStore;
