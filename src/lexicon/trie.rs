//! Prefix-tree storage for lexicon words.

use ahash::AHashMap;

/// One node of the trie. A node is terminal when a stored word ends on it.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: AHashMap<char, TrieNode>,
    terminal: bool,
}

/// A character trie over lowercase words.
///
/// Prefixes share nodes, so membership and prefix checks cost one node hop
/// per character regardless of how many words are stored.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Trie {
        Trie::default()
    }

    /// Inserts a word, returning `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.terminal {
            false
        } else {
            node.terminal = true;
            self.len += 1;
            true
        }
    }

    /// Whether the exact word is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.node(word).is_some_and(|node| node.terminal)
    }

    /// Whether any stored word starts with the prefix.
    ///
    /// Every word is a prefix of itself, and the empty prefix matches as soon
    /// as the trie is non-empty.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return !self.is_empty();
        }
        self.node(prefix).is_some()
    }

    /// Number of words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no words are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}
