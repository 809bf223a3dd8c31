pub mod identifiers;
pub mod report;

pub use identifiers::VocabularyVersion;
pub use report::{Leaderboard, ScoreReport, ScoredCandidate, SegmentMatch, Segmentation};
