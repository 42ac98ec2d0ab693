//! # lockboard Infrastructure Layer
//!
//! Cross-cutting technical concerns that wire the stores and use cases
//! together.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered TOML + environment configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`factory`] | Store creation from configuration |
//! | [`bootstrap`] | `AppContext` composition root |
//! | [`health`] | Store round-trip health check |
//! | [`constants`] | Infrastructure defaults |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod factory;
pub mod health;
pub mod logging;

pub use bootstrap::{AppContext, init_app};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use factory::{StoreFactory, create_store};
