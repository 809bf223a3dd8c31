use std::collections::BTreeMap;

use crate::types::report::{Leaderboard, ScoredCandidate};

/// Tracks the running maximum score and every candidate tied at it.
///
/// The first observation sets the maximum. A strictly higher score drops
/// everything retained so far. Repeated candidate strings collapse to one
/// entry.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    highest: Option<i64>,
    retained: BTreeMap<String, i64>,
    considered: usize,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, candidate: impl Into<String>, score: i64) {
        self.considered += 1;

        match self.highest {
            Some(highest) if score < highest => return,
            Some(highest) if score == highest => {}
            _ => {
                self.highest = Some(score);
                self.retained.clear();
            }
        }

        self.retained.insert(candidate.into(), score);
    }

    pub fn highest(&self) -> Option<i64> {
        self.highest
    }

    pub fn finish(self) -> Leaderboard {
        let winners = self
            .retained
            .into_iter()
            .map(|(candidate, score)| ScoredCandidate { candidate, score })
            .collect();

        Leaderboard {
            highest_score: self.highest,
            candidates_considered: self.considered,
            winners,
        }
    }
}
