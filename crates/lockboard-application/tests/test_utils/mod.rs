//! Store doubles for use case tests

use lockboard_domain::error::{Error, Result};
use lockboard_domain::ports::KeyValueStore;
use lockboard_domain::value_objects::ScoredMember;
use lockboard_providers::store::InMemoryStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory store that counts every call it receives
#[derive(Debug, Default)]
pub struct CountingStore {
    inner: InMemoryStore,
    calls: AtomicUsize,
    conditional_writes: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of store calls
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of `set_if_absent*` calls
    pub fn conditional_writes(&self) -> usize {
        self.conditional_writes.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl KeyValueStore for CountingStore {
    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        self.record();
        self.inner.set(key, value, ttl)
    }

    fn set_if_absent(&self, key: &str, value: &str) -> Result<bool> {
        self.record();
        self.conditional_writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_if_absent(key, value)
    }

    fn set_if_absent_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<bool> {
        self.record();
        self.conditional_writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_if_absent_with_ttl(key, value, ttl)
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        self.record();
        self.inner.get(key)
    }

    fn get_and_set(&self, key: &str, value: &str) -> Result<Option<String>> {
        self.record();
        self.inner.get_and_set(key, value)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        self.record();
        self.inner.delete(key)
    }

    fn delete_if_equals(&self, key: &str, expected: &str) -> Result<bool> {
        self.record();
        self.inner.delete_if_equals(key, expected)
    }

    fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        self.record();
        self.inner.expire(key, ttl)
    }

    fn time_to_live(&self, key: &str) -> Result<Option<Duration>> {
        self.record();
        self.inner.time_to_live(key)
    }

    fn increment_by(&self, key: &str, delta: i64) -> Result<i64> {
        self.record();
        self.inner.increment_by(key, delta)
    }

    fn zset_increment_score(&self, collection: &str, member: &str, delta: f64) -> Result<f64> {
        self.record();
        self.inner.zset_increment_score(collection, member, delta)
    }

    fn zset_descending_range(
        &self,
        collection: &str,
        start: isize,
        end: isize,
    ) -> Result<Vec<ScoredMember>> {
        self.record();
        self.inner.zset_descending_range(collection, start, end)
    }

    fn provider_name(&self) -> &str {
        "counting"
    }
}

/// Store whose every call fails as if the server were down
#[derive(Debug, Default)]
pub struct UnavailableStore;

fn down<T>() -> Result<T> {
    Err(Error::store_unavailable("connection refused"))
}

impl KeyValueStore for UnavailableStore {
    fn set(&self, _key: &str, _value: &str, _ttl: Option<Duration>) -> Result<()> {
        down()
    }

    fn set_if_absent(&self, _key: &str, _value: &str) -> Result<bool> {
        down()
    }

    fn set_if_absent_with_ttl(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<bool> {
        down()
    }

    fn get(&self, _key: &str) -> Result<Option<String>> {
        down()
    }

    fn get_and_set(&self, _key: &str, _value: &str) -> Result<Option<String>> {
        down()
    }

    fn delete(&self, _key: &str) -> Result<bool> {
        down()
    }

    fn delete_if_equals(&self, _key: &str, _expected: &str) -> Result<bool> {
        down()
    }

    fn expire(&self, _key: &str, _ttl: Duration) -> Result<bool> {
        down()
    }

    fn time_to_live(&self, _key: &str) -> Result<Option<Duration>> {
        down()
    }

    fn increment_by(&self, _key: &str, _delta: i64) -> Result<i64> {
        down()
    }

    fn zset_increment_score(&self, _collection: &str, _member: &str, _delta: f64) -> Result<f64> {
        down()
    }

    fn zset_descending_range(
        &self,
        _collection: &str,
        _start: isize,
        _end: isize,
    ) -> Result<Vec<ScoredMember>> {
        down()
    }

    fn provider_name(&self) -> &str {
        "unavailable"
    }
}
