//! Leaderboard value objects

use serde::{Deserialize, Serialize};

/// A raw `(member, score)` pair as returned by a sorted-set range query
pub type ScoredMember = (String, f64);

/// One ranked entry of a leaderboard collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Serialized member identifier
    pub member: String,
    /// Accumulated score
    pub score: f64,
}

impl LeaderboardEntry {
    /// Create a new entry
    pub fn new<M: Into<String>>(member: M, score: f64) -> Self {
        Self {
            member: member.into(),
            score,
        }
    }
}

impl From<ScoredMember> for LeaderboardEntry {
    fn from((member, score): ScoredMember) -> Self {
        Self { member, score }
    }
}
