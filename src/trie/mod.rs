pub mod arena;
pub mod lookup_trie;

pub use arena::ArenaTrie;
pub use lookup_trie::LookupTrie;

/// Read side of a token vocabulary keyed by character.
///
/// Implementations must be fully built before they are queried; every
/// method here takes `&self`, so a finished vocabulary can be shared across
/// threads without further synchronization.
pub trait TokenLookup {
    /// Follows `chars` from the root and returns the stored value if the
    /// path exists and ends on a terminal node.
    fn walk<I>(&self, chars: I) -> Option<i64>
    where
        I: IntoIterator<Item = char>;

    /// Longest terminal prefix of `input` with at least one character.
    ///
    /// Returns the prefix length in characters and its value.
    fn longest_match(&self, input: &[char]) -> Option<(usize, i64)>;

    /// Number of distinct tokens registered.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, token: &str) -> Option<i64> {
        self.walk(token.chars())
    }

    fn contains(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }
}
