//! Configuration management
//!
//! Layered configuration: defaults, then a TOML file, then
//! `LOCKBOARD__SECTION__FIELD` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LockConfig, LoggingConfig, StoreConfig, StoreProvider};
