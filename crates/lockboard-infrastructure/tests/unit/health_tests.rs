//! Health Check Tests

use lockboard_domain::KeyValueStore;
use lockboard_infrastructure::constants::HEALTH_CHECK_KEY;
use lockboard_infrastructure::health::{HealthStatus, check_store};
use lockboard_providers::store::{InMemoryStore, RedisStore};
use std::time::Duration;

#[test]
fn test_memory_store_is_healthy() {
    let store = InMemoryStore::new();
    let check = check_store(&store);

    assert_eq!(check.status, HealthStatus::Up);
    assert_eq!(check.name, "store:memory");
    assert!(check.error.is_none());
    // The check cleans up after itself
    assert!(store.get(HEALTH_CHECK_KEY).unwrap().is_none());
}

#[test]
fn test_unreachable_redis_is_down() {
    let store =
        RedisStore::with_pool_config("redis://127.0.0.1:1", 1, Duration::from_millis(200))
            .unwrap();
    let check = check_store(&store);

    assert_eq!(check.status, HealthStatus::Down);
    assert!(!check.status.is_healthy());
    assert!(check.error.is_some());
}
