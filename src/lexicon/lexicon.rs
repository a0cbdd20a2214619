//! The word store backing suggestion generation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PerkinsError, Result};
use crate::lexicon::trie::Trie;

/// A deduplicated set of lowercase words with stable insertion order.
///
/// Words live in two views that only [`Lexicon::insert`] may touch: a trie
/// for membership and prefix checks, and a vector preserving the order words
/// arrived in. Ranking walks the vector, so candidate order is reproducible
/// across runs.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    trie: Trie,
    words: Vec<String>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    pub fn new() -> Lexicon {
        Lexicon::default()
    }

    /// Builds a lexicon from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Result<Lexicon>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        for word in words {
            lexicon.insert(word.as_ref())?;
        }
        Ok(lexicon)
    }

    /// A small demonstration lexicon of rhyming words.
    pub fn sample() -> Lexicon {
        let words = ["call", "ball", "fall", "hall", "cake", "lake", "make", "take"];
        let mut lexicon = Lexicon::new();
        for word in words {
            // Sample words are all lowercase a-z, so insertion cannot fail.
            let _ = lexicon.insert(word);
        }
        lexicon
    }

    /// Inserts a word, returning `false` if it was already present.
    ///
    /// Words are lowercased before storage and must be non-empty ASCII
    /// letters, matching what cell decoding can produce.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let normalized = word.to_lowercase();
        if normalized.is_empty() || !normalized.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(PerkinsError::invalid_word(word));
        }
        if self.trie.insert(&normalized) {
            self.words.push(normalized);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Whether the word is stored (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(&word.to_lowercase())
    }

    /// Whether any stored word starts with the prefix (case-insensitive).
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.trie.contains_prefix(&prefix.to_lowercase())
    }

    /// All words in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words stored.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words are stored.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Loads a lexicon from a text file with one word per line.
    ///
    /// Blank lines and lines with non-letter characters are skipped, so a
    /// word list with stray punctuation loads without failing.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
        let mut lexicon = Lexicon::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
                lexicon.insert(word)?;
            }
        }

        Ok(lexicon)
    }
}
