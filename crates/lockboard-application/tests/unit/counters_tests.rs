//! Counter Tests

use crate::test_utils::UnavailableStore;
use lockboard_application::Counters;
use lockboard_domain::error::Error;
use lockboard_providers::store::InMemoryStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

fn counters() -> Counters {
    Counters::new(Arc::new(InMemoryStore::new()))
}

#[test]
fn test_set_get_and_step() {
    let counters = counters();
    assert_eq!(counters.get("stock").unwrap(), None);

    counters.set("stock", 9).unwrap();
    assert_eq!(counters.get("stock").unwrap(), Some(9));
    assert_eq!(counters.decrement("stock").unwrap(), 8);
    assert_eq!(counters.increment("stock").unwrap(), 9);
    assert_eq!(counters.increment_by("stock", -10).unwrap(), -1);
}

#[test]
fn test_flash_sale_never_oversells() {
    let counters = counters();
    counters.set("iPhone X", 9).unwrap();
    let sold = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let counters = counters.clone();
            let sold = Arc::clone(&sold);
            thread::spawn(move || {
                if counters.decrement("iPhone X").unwrap() >= 0 {
                    sold.fetch_add(1, Ordering::SeqCst);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(sold.load(Ordering::SeqCst), 9);
    assert_eq!(counters.get("iPhone X").unwrap(), Some(9 - 50));
}

#[test]
fn test_increment_with_expiry_sets_window_once() {
    let counters = counters();

    assert_eq!(
        counters
            .increment_with_expiry("15915839500", Duration::from_secs(60))
            .unwrap(),
        1
    );
    let first_ttl = counters.time_to_live("15915839500").unwrap().unwrap();
    assert!(first_ttl <= Duration::from_secs(60));

    assert_eq!(
        counters
            .increment_with_expiry("15915839500", Duration::from_secs(600))
            .unwrap(),
        2
    );
    let second_ttl = counters.time_to_live("15915839500").unwrap().unwrap();
    assert!(second_ttl <= Duration::from_secs(60));
}

#[test]
fn test_expiry_window_resets_counter() {
    let counters = counters();
    counters
        .increment_with_expiry("window", Duration::from_millis(20))
        .unwrap();
    thread::sleep(Duration::from_millis(40));

    assert_eq!(counters.get("window").unwrap(), None);
    assert_eq!(
        counters
            .increment_with_expiry("window", Duration::from_millis(20))
            .unwrap(),
        1
    );
}

#[test]
fn test_time_to_live_without_expiry() {
    let counters = counters();
    counters.set("plain", 1).unwrap();
    assert_eq!(counters.time_to_live("plain").unwrap(), None);
    assert_eq!(counters.time_to_live("missing").unwrap(), None);
}

#[test]
fn test_invalid_arguments() {
    let counters = counters();
    assert!(matches!(
        counters.increment(""),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        counters.increment_with_expiry("k", Duration::ZERO),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_store_failure_propagates() {
    let counters = Counters::new(Arc::new(UnavailableStore));
    assert!(counters.increment("k").unwrap_err().is_store_unavailable());
}

#[test]
fn test_increment_with_huge_window() {
    let counters = counters();

    assert_eq!(
        counters
            .increment_with_expiry("phone", Duration::MAX)
            .unwrap(),
        1
    );
    assert_eq!(
        counters
            .increment_with_expiry("phone", Duration::MAX)
            .unwrap(),
        2
    );
}
