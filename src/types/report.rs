use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::RankConfig;
use crate::types::identifiers::VocabularyVersion;

/// One token consumed during segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentMatch {
    pub token: String,
    pub value: i64,
    /// Character offset of the first matched character.
    pub start: usize,
    /// Character offset one past the last matched character.
    pub end: usize,
}

/// Full trace of scoring one input: what matched, what was skipped, and
/// the resulting total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    pub matches: Vec<SegmentMatch>,
    pub skipped: usize,
    pub total: i64,
}

/// A candidate word paired with its computed score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: String,
    pub score: i64,
}

/// Outcome of aggregating many candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    /// `None` only when no candidate was observed.
    pub highest_score: Option<i64>,
    pub candidates_considered: usize,
    /// Every candidate tied at `highest_score`, sorted by candidate.
    pub winners: Vec<ScoredCandidate>,
}

/// Self-describing output of a full run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub vocabulary_version: VocabularyVersion,
    pub vocabulary_tokens: usize,
    pub config: RankConfig,
    pub generated_at: DateTime<Utc>, // informational only
    pub leaderboard: Leaderboard,
}
