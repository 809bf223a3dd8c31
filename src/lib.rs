//! Greedy longest-match word scoring.
//!
//! `wordscore` loads a table of `<token> <value>` records into a
//! character-keyed prefix tree, then scores candidate words by walking them
//! left to right and consuming, at each position, the longest registered
//! token that starts there. Unmatched characters are skipped and add
//! nothing. The best-scoring candidates of a word list are collected into a
//! deterministic [`Leaderboard`](types::Leaderboard).
//!
//! Segmentation is greedy by design: an early long match is never undone to
//! make room for a better split later in the word.

pub mod scoring;
pub mod trie;
pub mod types;
pub mod vocabulary;
