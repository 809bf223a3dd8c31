pub mod aggregator;
pub mod config;
pub mod segmenter;

use rayon::prelude::*;

use crate::trie::TokenLookup;
use crate::types::report::Leaderboard;
pub use aggregator::ResultAggregator;
pub use config::{ConfigError, RankConfig, Strategy};
pub use segmenter::{score, GreedyScorer, PrefixWalkScorer, Segmenter};

/// Scores a list of candidates against a vocabulary and keeps the best.
pub struct WordRanker<S = Strategy> {
    segmenter: S,
    lowercase_candidates: bool,
    parallel: bool,
}

impl Default for WordRanker<Strategy> {
    fn default() -> Self {
        Self::from_config(&RankConfig::v0())
    }
}

impl WordRanker<Strategy> {
    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            segmenter: config.strategy,
            lowercase_candidates: config.lowercase_candidates,
            parallel: config.parallel,
        }
    }
}

impl<S> WordRanker<S>
where
    S: Segmenter + Sync,
{
    pub fn new(segmenter: S) -> Self {
        let defaults = RankConfig::v0();
        Self {
            segmenter,
            lowercase_candidates: defaults.lowercase_candidates,
            parallel: defaults.parallel,
        }
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase_candidates = lowercase;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Score of a single candidate after normalization.
    pub fn score_candidate<L: TokenLookup>(&self, lookup: &L, candidate: &str) -> i64 {
        if self.lowercase_candidates {
            self.segmenter.score(lookup, &candidate.to_lowercase())
        } else {
            self.segmenter.score(lookup, candidate)
        }
    }

    pub fn rank<L, C>(&self, lookup: &L, candidates: &[C]) -> Leaderboard
    where
        L: TokenLookup + Sync,
        C: AsRef<str> + Sync,
    {
        // 1. Scoring phase
        let scores: Vec<i64> = if self.parallel {
            candidates
                .par_iter()
                .map(|c| self.score_candidate(lookup, c.as_ref()))
                .collect()
        } else {
            candidates
                .iter()
                .map(|c| self.score_candidate(lookup, c.as_ref()))
                .collect()
        };

        // 2. Aggregation phase, in input order regardless of how scores were computed
        let mut aggregator = ResultAggregator::new();
        for (candidate, score) in candidates.iter().zip(scores) {
            aggregator.observe(candidate.as_ref(), score);
        }

        let board = aggregator.finish();
        log::debug!(
            "ranked {} candidates, highest {:?} shared by {}",
            board.candidates_considered,
            board.highest_score,
            board.winners.len()
        );
        board
    }
}
