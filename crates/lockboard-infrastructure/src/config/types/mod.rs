//! Configuration type definitions

pub mod app;
pub mod lock;
pub mod logging;
pub mod store;

pub use app::AppConfig;
pub use lock::LockConfig;
pub use logging::LoggingConfig;
pub use store::{StoreConfig, StoreProvider};
