//! Environment variable configuration tests
//!
//! Environment variables use the `LOCKBOARD__` prefix with `__` between
//! nested keys. These tests mutate the process environment and must run
//! sequentially:
//!
//! ```bash
//! cargo test -p lockboard-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```

use lockboard_domain::value_objects::LockMode;
use lockboard_infrastructure::config::{ConfigLoader, StoreProvider};
use std::env;
use tempfile::TempDir;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_vars_override_defaults() {
    set_env("LOCKBOARD__STORE__PROVIDER", "memory");
    set_env("LOCKBOARD__LOCK__DEFAULT_TTL_MS", "1500");
    set_env("LOCKBOARD__LOCK__MODE", "legacy");

    let config = ConfigLoader::new().load();

    remove_env("LOCKBOARD__STORE__PROVIDER");
    remove_env("LOCKBOARD__LOCK__DEFAULT_TTL_MS");
    remove_env("LOCKBOARD__LOCK__MODE");

    let config = config.expect("Should load config");
    assert_eq!(config.store.provider, StoreProvider::Memory);
    assert_eq!(config.lock.default_ttl_ms, 1500);
    assert_eq!(config.lock.mode, LockMode::Legacy);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_vars_override_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lockboard.toml");
    std::fs::write(&path, "[store]\nredis_url = \"redis://from-file:6379\"\n").unwrap();
    set_env("LOCKBOARD__STORE__REDIS_URL", "redis://from-env:6379");

    let config = ConfigLoader::new().with_config_path(&path).load();

    remove_env("LOCKBOARD__STORE__REDIS_URL");

    let config = config.expect("Should load config");
    assert_eq!(config.store.redis_url, "redis://from-env:6379");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_not_loaded() {
    set_env("LOCKBOARD_STORE_PROVIDER", "memory");

    let config = ConfigLoader::new().load();

    remove_env("LOCKBOARD_STORE_PROVIDER");

    let config = config.expect("Should load config");
    assert_eq!(config.store.provider, StoreProvider::Redis);
}
