//! In-memory key-value store
//!
//! Concurrent in-process implementation of [`KeyValueStore`] built on
//! `DashMap`. Every operation runs under the shard lock of its key, which
//! gives the same per-key atomicity a single Redis node gives.
//!
//! ## Features
//!
//! - Strings, integer counters and sorted sets in one keyspace
//! - Millisecond TTLs, enforced lazily on access
//! - Redis-compatible ordering for descending sorted-set reads
//!
//! ## Example
//!
//! ```ignore
//! use lockboard_providers::store::InMemoryStore;
//!
//! let store = InMemoryStore::new();
//! assert!(store.set_if_absent("k", "v")?);
//! ```

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use lockboard_domain::error::{Error, Result};
use lockboard_domain::ports::KeyValueStore;
use lockboard_domain::value_objects::ScoredMember;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const WRONG_TYPE: &str = "WRONGTYPE Operation against a key holding the wrong kind of value";

#[derive(Debug, Clone)]
enum StoredValue {
    Text(String),
    SortedSet(HashMap<String, f64>),
}

#[derive(Debug, Clone)]
struct StoredEntry {
    value: StoredValue,
    expires_at: Option<Instant>,
}

impl StoredEntry {
    fn text(value: &str, expires_at: Option<Instant>) -> Self {
        Self {
            value: StoredValue::Text(value.to_string()),
            expires_at,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    fn as_text(&self) -> Result<&str> {
        match &self.value {
            StoredValue::Text(text) => Ok(text),
            StoredValue::SortedSet(_) => Err(Error::store(WRONG_TYPE)),
        }
    }
}

/// Expiry instant for `ttl`; a TTL beyond what `Instant` can represent never expires
fn deadline(now: Instant, ttl: Option<Duration>) -> Option<Instant> {
    ttl.and_then(|ttl| now.checked_add(ttl))
}

/// Resolve Redis-style inclusive ranks against a collection of `len` members
fn resolve_ranks(len: usize, start: isize, end: isize) -> Option<(usize, usize)> {
    let len = isize::try_from(len).ok()?;
    if len == 0 {
        return None;
    }
    let start = if start < 0 { (start + len).max(0) } else { start };
    let end = if end < 0 { end + len } else { end.min(len - 1) };
    if start > end || start >= len {
        return None;
    }
    Some((start as usize, end as usize))
}

/// In-memory key-value store
///
/// Cheap to construct; wrap in an `Arc` to share between threads.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, StoredEntry>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .iter()
            .filter(|entry| !entry.value().is_expired(now))
            .count()
    }

    /// True when no live key exists
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every key
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Run `read` against the live entry at `key`, purging it if it has expired
    fn read_live<T>(&self, key: &str, read: impl FnOnce(&StoredEntry) -> T) -> Option<T> {
        let now = Instant::now();
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => return Some(read(entry.value())),
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove_if(key, |_, entry| entry.is_expired(now));
        }
        None
    }

    fn insert_if_absent(&self, key: &str, value: &str, ttl: Option<Duration>) -> bool {
        let now = Instant::now();
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_expired(now) {
                    occupied.insert(StoredEntry::text(value, deadline(now, ttl)));
                    true
                } else {
                    false
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(StoredEntry::text(value, deadline(now, ttl)));
                true
            }
        }
    }
}

impl KeyValueStore for InMemoryStore {
    fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        let now = Instant::now();
        self.entries
            .insert(key.to_string(), StoredEntry::text(value, deadline(now, ttl)));
        Ok(())
    }

    fn set_if_absent(&self, key: &str, value: &str) -> Result<bool> {
        Ok(self.insert_if_absent(key, value, None))
    }

    fn set_if_absent_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<bool> {
        Ok(self.insert_if_absent(key, value, Some(ttl)))
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        self.read_live(key, |entry| entry.as_text().map(str::to_string))
            .transpose()
    }

    fn get_and_set(&self, key: &str, value: &str) -> Result<Option<String>> {
        let now = Instant::now();
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                let previous = if occupied.get().is_expired(now) {
                    None
                } else {
                    Some(occupied.get().as_text()?.to_string())
                };
                occupied.insert(StoredEntry::text(value, None));
                Ok(previous)
            }
            Entry::Vacant(vacant) => {
                vacant.insert(StoredEntry::text(value, None));
                Ok(None)
            }
        }
    }

    fn delete(&self, key: &str) -> Result<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .remove(key)
            .is_some_and(|(_, entry)| !entry.is_expired(now)))
    }

    fn delete_if_equals(&self, key: &str, expected: &str) -> Result<bool> {
        let now = Instant::now();
        let removed = self.entries.remove_if(key, |_, entry| {
            !entry.is_expired(now) && matches!(&entry.value, StoredValue::Text(text) if text == expected)
        });
        Ok(removed.is_some())
    }

    fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        let now = Instant::now();
        match self.entries.get_mut(key) {
            Some(mut entry) if !entry.is_expired(now) => {
                entry.expires_at = deadline(now, Some(ttl));
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn time_to_live(&self, key: &str) -> Result<Option<Duration>> {
        let now = Instant::now();
        Ok(self
            .read_live(key, |entry| {
                entry
                    .expires_at
                    .map(|at| at.saturating_duration_since(now))
            })
            .flatten())
    }

    fn increment_by(&self, key: &str, delta: i64) -> Result<i64> {
        let now = Instant::now();
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) if !occupied.get().is_expired(now) => {
                let entry = occupied.get_mut();
                let current: i64 = entry.as_text()?.parse().map_err(|_| {
                    Error::store("ERR value is not an integer or out of range")
                })?;
                let next = current
                    .checked_add(delta)
                    .ok_or_else(|| Error::store("ERR increment or decrement would overflow"))?;
                entry.value = StoredValue::Text(next.to_string());
                Ok(next)
            }
            Entry::Occupied(mut occupied) => {
                occupied.insert(StoredEntry::text(&delta.to_string(), None));
                Ok(delta)
            }
            Entry::Vacant(vacant) => {
                vacant.insert(StoredEntry::text(&delta.to_string(), None));
                Ok(delta)
            }
        }
    }

    fn zset_increment_score(&self, collection: &str, member: &str, delta: f64) -> Result<f64> {
        let now = Instant::now();
        let mut slot = self
            .entries
            .entry(collection.to_string())
            .or_insert_with(|| StoredEntry {
                value: StoredValue::SortedSet(HashMap::new()),
                expires_at: None,
            });
        if slot.is_expired(now) {
            *slot = StoredEntry {
                value: StoredValue::SortedSet(HashMap::new()),
                expires_at: None,
            };
        }
        let StoredValue::SortedSet(members) = &mut slot.value else {
            return Err(Error::store(WRONG_TYPE));
        };
        let current = members.get(member).copied().unwrap_or(0.0);
        let next = current + delta;
        if next.is_nan() {
            return Err(Error::store("ERR resulting score is not a number (NaN)"));
        }
        members.insert(member.to_string(), next);
        Ok(next)
    }

    fn zset_descending_range(
        &self,
        collection: &str,
        start: isize,
        end: isize,
    ) -> Result<Vec<ScoredMember>> {
        let members = self.read_live(collection, |entry| match &entry.value {
            StoredValue::SortedSet(members) => Ok(members
                .iter()
                .map(|(member, score)| (member.clone(), *score))
                .collect::<Vec<_>>()),
            StoredValue::Text(_) => Err(Error::store(WRONG_TYPE)),
        });
        let mut members = match members {
            Some(members) => members?,
            None => return Ok(Vec::new()),
        };

        // Highest score first; equal scores in reverse byte order, as ZREVRANGE does.
        members.sort_by(|(a_member, a_score), (b_member, b_score)| {
            b_score
                .partial_cmp(a_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b_member.as_bytes().cmp(a_member.as_bytes()))
        });

        Ok(match resolve_ranks(members.len(), start, end) {
            Some((first, last)) => members.drain(first..=last).collect(),
            None => Vec::new(),
        })
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
