//! Leaderboard Use Case
//!
//! Score-ranked collections on top of the store's sorted-set primitive.
//! Scores only move through increments; members are unique per collection.
//!
//! Store failures propagate: there is no safe default score. An increment
//! either fully applies or is reported as failed.

use crate::use_cases::validation::require_non_empty;
use lockboard_domain::constants::{LEADERBOARD_FIRST_RANK, LEADERBOARD_LAST_RANK};
use lockboard_domain::error::{Error, Result};
use lockboard_domain::ports::KeyValueStore;
use lockboard_domain::value_objects::LeaderboardEntry;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// Leaderboard over named sorted collections
#[derive(Debug, Clone)]
pub struct Leaderboard {
    store: Arc<dyn KeyValueStore>,
}

impl Leaderboard {
    /// Create a leaderboard backed by `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Add `delta` to `member`'s score, creating the member at 0 if absent
    ///
    /// # Returns
    /// The member's score after the increment
    pub fn increment_score(&self, collection: &str, member: &str, delta: f64) -> Result<f64> {
        require_non_empty("collection", collection)?;
        require_non_empty("member", member)?;
        if !delta.is_finite() {
            return Err(Error::invalid_argument("delta must be a finite number"));
        }

        let score = self.store.zset_increment_score(collection, member, delta)?;
        debug!(collection, member, delta, score, "Score incremented");
        Ok(score)
    }

    /// Every member of `collection`, highest score first
    ///
    /// Equal scores keep the store's ordering, which for Redis `ZREVRANGE`
    /// is reverse lexicographic on the member bytes. An unknown collection
    /// is empty.
    pub fn top_entries(&self, collection: &str) -> Result<Vec<LeaderboardEntry>> {
        require_non_empty("collection", collection)?;
        let entries = self.store.zset_descending_range(
            collection,
            LEADERBOARD_FIRST_RANK,
            LEADERBOARD_LAST_RANK,
        )?;
        Ok(entries.into_iter().map(LeaderboardEntry::from).collect())
    }

    /// Increment the score of a record, using its JSON encoding as the member
    pub fn increment_record<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
        delta: f64,
    ) -> Result<f64> {
        let member = serde_json::to_string(record)?;
        self.increment_score(collection, &member, delta)
    }

    /// [`top_entries`](Self::top_entries) with members decoded from JSON
    pub fn top_records<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<(T, f64)>> {
        self.top_entries(collection)?
            .into_iter()
            .map(|entry| -> Result<(T, f64)> {
                Ok((serde_json::from_str(&entry.member)?, entry.score))
            })
            .collect()
    }
}
