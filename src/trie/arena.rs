//! Index-based variant of [`LookupTrie`](super::LookupTrie).
//!
//! Nodes live in one growable vector and refer to their children by
//! position, which keeps large vocabularies to a single allocation for the
//! node table. Behaviour is identical to the owned tree.

use std::collections::HashMap;

use super::TokenLookup;

/// Position of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeId(usize);

impl NodeId {
    const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
struct ArenaNode {
    children: HashMap<char, NodeId>,
    value: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct ArenaTrie {
    nodes: Vec<ArenaNode>,
    tokens: usize,
}

impl Default for ArenaTrie {
    fn default() -> Self {
        Self {
            nodes: vec![ArenaNode::default()],
            tokens: 0,
        }
    }
}

impl ArenaTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: &str, value: i64) {
        let mut id = NodeId::ROOT;
        for ch in token.chars() {
            id = match self.node(id).children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.push_node();
                    self.node_mut(id).children.insert(ch, next);
                    next
                }
            };
        }
        if self.node_mut(id).value.replace(value).is_none() {
            self.tokens += 1;
        }
    }

    fn node(&self, id: NodeId) -> &ArenaNode {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut ArenaNode {
        &mut self.nodes[id.index()]
    }

    fn push_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ArenaNode::default());
        id
    }

    /// Total nodes allocated, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl TokenLookup for ArenaTrie {
    fn walk<I>(&self, chars: I) -> Option<i64>
    where
        I: IntoIterator<Item = char>,
    {
        let mut id = NodeId::ROOT;
        for ch in chars {
            id = *self.node(id).children.get(&ch)?;
        }
        self.node(id).value
    }

    fn longest_match(&self, input: &[char]) -> Option<(usize, i64)> {
        let mut id = NodeId::ROOT;
        let mut best = None;
        for (i, ch) in input.iter().enumerate() {
            match self.node(id).children.get(ch) {
                Some(&next) => id = next,
                None => break,
            }
            if let Some(value) = self.node(id).value {
                best = Some((i + 1, value));
            }
        }
        best
    }

    fn len(&self) -> usize {
        self.tokens
    }
}

impl<S: AsRef<str>> Extend<(S, i64)> for ArenaTrie {
    fn extend<T: IntoIterator<Item = (S, i64)>>(&mut self, iter: T) {
        for (token, value) in iter {
            self.insert(token.as_ref(), value);
        }
    }
}

impl<S: AsRef<str>> FromIterator<(S, i64)> for ArenaTrie {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        let mut trie = ArenaTrie::new();
        trie.extend(iter);
        trie
    }
}
