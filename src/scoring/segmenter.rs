use crate::scoring::config::Strategy;
use crate::trie::TokenLookup;
use crate::types::report::{SegmentMatch, Segmentation};

/// Greedy longest-match segmentation.
///
/// The cursor starts at the first character. At each position the longest
/// registered token starting there is consumed and its value added; if no
/// token starts there the character is skipped and contributes nothing.
/// Earlier choices are never revisited, so the total is a local maximum per
/// position and can be lower than the best possible split.
///
/// Values are summed exactly in `i128` and only the final total is clamped
/// to the `i64` range, so the result does not depend on the order in which
/// large positive and negative tokens appear.
pub trait Segmenter {
    /// Longest token of `input` beginning at `start`, as `(end, value)`
    /// where `end` is the exclusive character offset.
    fn match_at<L: TokenLookup>(
        &self,
        lookup: &L,
        input: &[char],
        start: usize,
    ) -> Option<(usize, i64)>;

    fn score<L: TokenLookup>(&self, lookup: &L, input: &str) -> i64 {
        let chars: Vec<char> = input.chars().collect();
        let (_, total) = run_cursor(self, lookup, &chars, |_, _, _| {});
        total
    }

    fn segment<L: TokenLookup>(&self, lookup: &L, input: &str) -> Segmentation {
        let chars: Vec<char> = input.chars().collect();
        let mut matches = Vec::new();

        let (skipped, total) = run_cursor(self, lookup, &chars, |start, end, value| {
            let token: String = chars[start..end].iter().collect();
            log::trace!("{input:?}: matched {token:?} at {start}..{end} = {value}");
            matches.push(SegmentMatch {
                token,
                value,
                start,
                end,
            });
        });

        Segmentation {
            matches,
            skipped,
            total,
        }
    }
}

/// The cursor loop shared by `score` and `segment`. Calls `on_match` with
/// `(start, end, value)` for every consumed token and returns the number
/// of skipped characters together with the clamped total.
fn run_cursor<S, L, F>(
    segmenter: &S,
    lookup: &L,
    chars: &[char],
    mut on_match: F,
) -> (usize, i64)
where
    S: Segmenter + ?Sized,
    L: TokenLookup,
    F: FnMut(usize, usize, i64),
{
    // At most one i64 per character: cannot overflow i128.
    let mut total: i128 = 0;
    let mut skipped = 0;
    let mut i = 0;

    while i < chars.len() {
        match segmenter.match_at(lookup, chars, i) {
            Some((end, value)) => {
                on_match(i, end, value);
                total += i128::from(value);
                i = end;
            }
            None => {
                skipped += 1;
                i += 1;
            }
        }
    }

    let clamped = i64::try_from(total).unwrap_or(if total > 0 { i64::MAX } else { i64::MIN });
    (skipped, clamped)
}

/// Tries `input[start..j]` for `j` from the end of the input down to
/// `start + 1`, one full lookup per attempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyScorer;

impl Segmenter for GreedyScorer {
    fn match_at<L: TokenLookup>(
        &self,
        lookup: &L,
        input: &[char],
        start: usize,
    ) -> Option<(usize, i64)> {
        (start + 1..=input.len())
            .rev()
            .find_map(|end| {
                lookup
                    .walk(input[start..end].iter().copied())
                    .map(|value| (end, value))
            })
    }
}

/// Walks the trie once from `start` and keeps the deepest terminal seen.
/// Same result as [`GreedyScorer`] in O(n) per position instead of O(n²).
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixWalkScorer;

impl Segmenter for PrefixWalkScorer {
    fn match_at<L: TokenLookup>(
        &self,
        lookup: &L,
        input: &[char],
        start: usize,
    ) -> Option<(usize, i64)> {
        lookup
            .longest_match(&input[start..])
            .map(|(len, value)| (start + len, value))
    }
}

impl Segmenter for Strategy {
    fn match_at<L: TokenLookup>(
        &self,
        lookup: &L,
        input: &[char],
        start: usize,
    ) -> Option<(usize, i64)> {
        match self {
            Strategy::Greedy => GreedyScorer.match_at(lookup, input, start),
            Strategy::PrefixWalk => PrefixWalkScorer.match_at(lookup, input, start),
        }
    }
}

/// Scores `input` with the reference greedy strategy.
pub fn score<L: TokenLookup>(lookup: &L, input: &str) -> i64 {
    GreedyScorer.score(lookup, input)
}
