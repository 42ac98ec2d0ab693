//! Store Factory Tests

use lockboard_domain::Error;
use lockboard_infrastructure::config::{StoreConfig, StoreProvider};
use lockboard_infrastructure::factory::{StoreFactory, create_store};

#[test]
fn test_create_memory_store() {
    let config = StoreConfig {
        provider: StoreProvider::Memory,
        ..StoreConfig::default()
    };
    let store = create_store(&config).unwrap();

    assert_eq!(store.provider_name(), "memory");
    assert!(store.set_if_absent("k", "v").unwrap());
}

#[test]
fn test_create_redis_store_does_not_connect() {
    let config = StoreConfig {
        redis_url: "redis://127.0.0.1:1".to_string(),
        ..StoreConfig::default()
    };
    let store = StoreFactory::create(&config).unwrap();

    assert_eq!(store.provider_name(), "redis");
}

#[test]
fn test_create_redis_store_rejects_bad_settings() {
    let zero_pool = StoreConfig {
        pool_size: 0,
        ..StoreConfig::default()
    };
    assert!(matches!(
        create_store(&zero_pool),
        Err(Error::Configuration { .. })
    ));

    let bad_url = StoreConfig {
        redis_url: "not a url".to_string(),
        ..StoreConfig::default()
    };
    assert!(matches!(
        create_store(&bad_url),
        Err(Error::Configuration { .. })
    ));
}
