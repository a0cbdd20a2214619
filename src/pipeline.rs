//! The end-to-end autocorrect pipeline.
//!
//! [`AutocorrectEngine`] ties the stages together: decode a cell sequence
//! into a word, check it against the lexicon, and rank suggestions when the
//! word is unknown. Every input produces exactly one [`Outcome`].

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::braille::CellDecoder;
use crate::error::{PerkinsError, Result};
use crate::lexicon::Lexicon;
use crate::spelling::{FeedbackStore, RankedCandidate, RankerConfig, SuggestionRanker};

/// The result of processing one cell sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The sequence decoded to a word the lexicon knows.
    Valid(String),
    /// The word is unknown; here are the closest lexicon words, best first.
    Suggestions(Vec<RankedCandidate>),
    /// The word is unknown and the lexicon has nothing to offer.
    NoSuggestions,
    /// The sequence contained a malformed or unmapped cell.
    InvalidInput,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Valid(word) => write!(f, "Valid word: {word}"),
            Outcome::Suggestions(candidates) => {
                let words: Vec<&str> = candidates.iter().map(|c| c.word.as_str()).collect();
                write!(f, "Did you mean: {}?", words.join(", "))
            }
            Outcome::NoSuggestions => write!(f, "No suggestions found"),
            Outcome::InvalidInput => write!(f, "Invalid Braille input"),
        }
    }
}

/// Counters describing the engine's current state.
#[derive(Debug, Clone, Serialize)]
pub struct EngineStats {
    /// Words in the lexicon.
    pub words: usize,
    /// Distinct words with accepted-suggestion feedback.
    pub feedback_entries: usize,
    /// Acceptances recorded across all words.
    pub total_reinforcements: u32,
}

/// Decodes Braille input and corrects it against a lexicon.
///
/// Processing borrows the engine immutably; only [`accept_suggestion`] and
/// [`add_word`] mutate state. Feedback accumulates for the engine's lifetime
/// and reorders future suggestion ties.
///
/// [`accept_suggestion`]: AutocorrectEngine::accept_suggestion
/// [`add_word`]: AutocorrectEngine::add_word
#[derive(Debug, Clone)]
pub struct AutocorrectEngine {
    decoder: CellDecoder,
    lexicon: Lexicon,
    ranker: SuggestionRanker,
    feedback: FeedbackStore,
}

impl AutocorrectEngine {
    /// Creates an engine over the given lexicon with default ranking.
    pub fn new(lexicon: Lexicon) -> AutocorrectEngine {
        AutocorrectEngine::with_config(lexicon, RankerConfig::default())
    }

    /// Creates an engine with a custom ranking configuration.
    pub fn with_config(lexicon: Lexicon, config: RankerConfig) -> AutocorrectEngine {
        AutocorrectEngine {
            decoder: CellDecoder::new(),
            lexicon,
            ranker: SuggestionRanker::with_config(config),
            feedback: FeedbackStore::new(),
        }
    }

    /// Processes a sequence of dot-number tokens.
    pub fn process<I, S>(&self, tokens: I) -> Outcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.classify(self.decoder.decode_word(tokens))
    }

    /// Processes a sequence of six-key chords.
    pub fn process_keys<I, S>(&self, chords: I) -> Outcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.classify(self.decoder.decode_word_keys(chords))
    }

    /// Ranks the lexicon against an already-decoded word.
    pub fn suggest_word(&self, word: &str) -> Vec<RankedCandidate> {
        self.ranker.rank(word, &self.lexicon, &self.feedback)
    }

    /// Records that the user accepted a suggested word.
    ///
    /// The word must exist in the lexicon; feedback for words the engine
    /// could never suggest would be unreachable state.
    pub fn accept_suggestion(&mut self, word: &str) -> Result<()> {
        if !self.lexicon.contains(word) {
            return Err(PerkinsError::invalid_word(word));
        }
        self.feedback.reinforce(word);
        Ok(())
    }

    /// Adds a word to the lexicon, returning `false` if already present.
    pub fn add_word(&mut self, word: &str) -> Result<bool> {
        self.lexicon.insert(word)
    }

    /// The decoder this engine processes input with.
    pub fn decoder(&self) -> &CellDecoder {
        &self.decoder
    }

    /// The lexicon this engine corrects against.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Accepted-suggestion counts recorded so far.
    pub fn feedback(&self) -> &FeedbackStore {
        &self.feedback
    }

    /// Current engine counters.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            words: self.lexicon.len(),
            feedback_entries: self.feedback.len(),
            total_reinforcements: self.feedback.total(),
        }
    }

    fn classify(&self, decoded: Result<String>) -> Outcome {
        let word = match decoded {
            Ok(word) => word,
            Err(err) => {
                debug!("input rejected: {err}");
                return Outcome::InvalidInput;
            }
        };

        // A word is at least one letter; zero cells cannot form one.
        if word.is_empty() {
            debug!("empty cell sequence rejected");
            return Outcome::InvalidInput;
        }

        if self.lexicon.contains(&word) {
            return Outcome::Valid(word);
        }

        let candidates = self.suggest_word(&word);
        debug!("no exact match for {word:?}; ranked {} candidate(s)", candidates.len());
        if candidates.is_empty() {
            Outcome::NoSuggestions
        } else {
            Outcome::Suggestions(candidates)
        }
    }
}

impl Default for AutocorrectEngine {
    fn default() -> AutocorrectEngine {
        AutocorrectEngine::new(Lexicon::new())
    }
}
