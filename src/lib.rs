//! # Perkins
//!
//! Braille-cell decoding with dictionary-backed autocorrect, in pure Rust.
//!
//! ## Features
//!
//! - Dot-number and six-key chord input for standard English Braille
//! - Trie-backed lexicon with stable insertion order
//! - Edit-distance suggestion ranking with accepted-suggestion feedback
//! - Deterministic "Did you mean?" output
//!
//! ## Quick start
//!
//! ```
//! use perkins::prelude::*;
//!
//! let engine = AutocorrectEngine::new(Lexicon::sample());
//! let outcome = engine.process(["145", "1", "123", "123"]);
//! assert_eq!(outcome.to_string(), "Did you mean: call, ball, fall?");
//! ```

pub mod braille;
pub mod cli;
pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod spelling;

pub mod prelude {
    //! Convenient re-exports of the types most callers need.

    pub use crate::braille::{Alphabet, Cell, CellDecoder};
    pub use crate::error::{PerkinsError, Result};
    pub use crate::lexicon::Lexicon;
    pub use crate::pipeline::{AutocorrectEngine, EngineStats, Outcome};
    pub use crate::spelling::{
        FeedbackStore, RankedCandidate, RankerConfig, SuggestionRanker, levenshtein_distance,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
