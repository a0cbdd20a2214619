//! Word storage for the autocorrect engine.
//!
//! [`lexicon::Lexicon`] pairs a [`trie::Trie`] for fast membership and prefix
//! checks with an insertion-ordered word list that ranking iterates over.

pub mod lexicon;
pub mod trie;

pub use lexicon::Lexicon;
pub use trie::Trie;
