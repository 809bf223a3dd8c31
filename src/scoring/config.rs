use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
}

/// How the start-of-cursor match is found. Both strategies produce the same
/// segmentation for every vocabulary and input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Probe every substring from the longest down.
    #[default]
    Greedy,
    /// One trie walk per cursor position, remembering the last terminal.
    PrefixWalk,
}

impl std::str::FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(Strategy::Greedy),
            "prefix-walk" => Ok(Strategy::PrefixWalk),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Lower-case candidates before scoring. The vocabulary is never
    /// normalized, so this only helps when it is stored lower-case.
    pub lowercase_candidates: bool,
    /// Score candidates on the rayon pool. Aggregation stays sequential.
    pub parallel: bool,
    pub strategy: Strategy,
}

impl RankConfig {
    pub fn v0() -> Self {
        Self {
            lowercase_candidates: true,
            parallel: false,
            strategy: Strategy::Greedy,
        }
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self::v0()
    }
}
