use std::collections::HashMap;

use super::TokenLookup;

/// A node owns its children outright; there are no back edges.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    // Some(..) iff a token ends here.
    value: Option<i64>,
}

/// Character-keyed prefix tree mapping tokens to integer values.
#[derive(Debug, Clone, Default)]
pub struct LookupTrie {
    root: TrieNode,
    tokens: usize,
}

impl LookupTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `token` with `value`, creating any missing nodes.
    ///
    /// Re-inserting a token overwrites its value. The empty token marks the
    /// root itself as terminal; it is stored but never matched by
    /// [`TokenLookup::longest_match`], since a match must consume input.
    pub fn insert(&mut self, token: &str, value: i64) {
        let mut node = &mut self.root;
        for ch in token.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.value.replace(value).is_none() {
            self.tokens += 1;
        }
    }
}

impl TokenLookup for LookupTrie {
    fn walk<I>(&self, chars: I) -> Option<i64>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = &self.root;
        for ch in chars {
            node = node.children.get(&ch)?;
        }
        node.value
    }

    fn longest_match(&self, input: &[char]) -> Option<(usize, i64)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, ch) in input.iter().enumerate() {
            match node.children.get(ch) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(value) = node.value {
                best = Some((i + 1, value));
            }
        }
        best
    }

    fn len(&self) -> usize {
        self.tokens
    }
}

impl<S: AsRef<str>> Extend<(S, i64)> for LookupTrie {
    fn extend<T: IntoIterator<Item = (S, i64)>>(&mut self, iter: T) {
        for (token, value) in iter {
            self.insert(token.as_ref(), value);
        }
    }
}

impl<S: AsRef<str>> FromIterator<(S, i64)> for LookupTrie {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        let mut trie = LookupTrie::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn inserted_tokens_are_found() {
        let trie: LookupTrie = [("hack", 10), ("hacker", 22), ("a", 1)].into_iter().collect();
        assert_eq!(trie.lookup("hack"), Some(10));
        assert_eq!(trie.lookup("hacker"), Some(22));
        assert_eq!(trie.lookup("a"), Some(1));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn last_insert_wins() {
        let mut trie = LookupTrie::new();
        trie.insert("hack", 10);
        trie.insert("hack", 3);
        assert_eq!(trie.lookup("hack"), Some(3));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn interior_prefix_is_not_a_match() {
        let trie: LookupTrie = [("hacker", 22)].into_iter().collect();
        // Path exists but the node is not terminal.
        assert_eq!(trie.lookup("hack"), None);
        // Past the end of the only token.
        assert_eq!(trie.lookup("hackers"), None);
        assert_eq!(trie.lookup("z"), None);
    }

    #[test]
    fn empty_token_marks_root() {
        let mut trie = LookupTrie::new();
        assert_eq!(trie.lookup(""), None);
        trie.insert("", 7);
        assert_eq!(trie.lookup(""), Some(7));
        assert_eq!(trie.longest_match(&chars("abc")), None);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn longest_match_prefers_longer_token() {
        let trie: LookupTrie = [("hack", 10), ("hacker", 22)].into_iter().collect();
        assert_eq!(trie.longest_match(&chars("hackers")), Some((6, 22)));
        assert_eq!(trie.longest_match(&chars("hacked")), Some((4, 10)));
        assert_eq!(trie.longest_match(&chars("hac")), None);
        assert_eq!(trie.longest_match(&[]), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let trie: LookupTrie = [("Ab", 4)].into_iter().collect();
        assert_eq!(trie.lookup("Ab"), Some(4));
        assert_eq!(trie.lookup("ab"), None);
    }

    #[test]
    fn multibyte_characters_walk_by_char() {
        let trie: LookupTrie = [("çé", 5)].into_iter().collect();
        assert_eq!(trie.lookup("çé"), Some(5));
        assert_eq!(trie.longest_match(&chars("çéx")), Some((2, 5)));
    }
}
