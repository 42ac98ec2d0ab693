//! Structured logging with tracing
//!
//! One subscriber per process: an `EnvFilter` in front of a stdout layer and,
//! when `logging.file_output` is set, a daily-rolled file layer. Both layers
//! use the same format (plain or JSON). `LOCKBOARD_LOG` replaces the
//! configured level with a full filter directive such as
//! `lockboard_application=debug,info`.

use crate::constants::{LOG_FILE_PREFIX, LOG_FILTER_ENV};
use crate::error_ext::ErrorContext;
use lockboard_domain::error::{Error, Result};
use std::path::Path;

pub use crate::config::LoggingConfig;
use tracing::{Level, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize logging with the provided configuration
///
/// # Errors
/// `Configuration` for an invalid level, or when a global subscriber is
/// already installed. `Io` when the log directory cannot be created.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer(config.json_format)];
    if let Some(path) = &config.file_output {
        layers.push(file_layer(daily_appender(path)?, config.json_format));
    }

    Registry::default()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| {
            Error::configuration_with_source("Failed to install the global log subscriber", e)
        })?;

    info!(
        %level,
        json = config.json_format,
        file = ?config.file_output,
        "Logging initialized"
    );
    Ok(())
}

fn stdout_layer(json: bool) -> BoxedLayer {
    let layer = fmt::layer().with_target(true).with_thread_names(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

fn file_layer(appender: RollingFileAppender, json: bool) -> BoxedLayer {
    let layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// `logs/lockboard.log` rolls into `logs/lockboard.log.YYYY-MM-DD`
fn daily_appender(path: &Path) -> Result<RollingFileAppender> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(LOG_FILE_PREFIX);

    std::fs::create_dir_all(directory)
        .io_context(format!("Failed to create log directory: {}", directory.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(directory)
        .config_context("Failed to open the log file")
}

/// Parse a configured level name
///
/// Accepts `warning` as an alias of `warn`; case-insensitive.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_ascii_lowercase().as_str() {
        "warning" => Ok(Level::WARN),
        name => name.parse::<Level>().map_err(|_| {
            Error::configuration(format!(
                "Invalid log level: {level}. Use trace, debug, info, warn, or error"
            ))
        }),
    }
}
