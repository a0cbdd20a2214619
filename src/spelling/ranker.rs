//! Candidate ranking for autocorrect suggestions.

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::spelling::feedback::FeedbackStore;
use crate::spelling::levenshtein::levenshtein_distance;

/// Default number of suggestions returned for a misspelled word.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// A lexicon word scored against an input word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// The candidate word.
    pub word: String,
    /// Edit distance from the input word.
    pub distance: usize,
    /// How often this word has been accepted as a correction.
    pub feedback: u32,
}

impl RankedCandidate {
    /// Creates a new candidate.
    pub fn new(word: String, distance: usize, feedback: u32) -> RankedCandidate {
        RankedCandidate {
            word,
            distance,
            feedback,
        }
    }
}

/// Configuration for suggestion ranking.
#[derive(Debug, Clone)]
pub struct RankerConfig {
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
}

impl Default for RankerConfig {
    fn default() -> RankerConfig {
        RankerConfig {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Ranks every lexicon word against an input and keeps the best few.
///
/// Candidates order by edit distance, then by accepted-suggestion count with
/// more accepted words first. The sort is stable over the lexicon's insertion
/// order, so full ties resolve the same way on every run. No distance cutoff
/// applies: a lexicon with any words at all always yields suggestions.
#[derive(Debug, Clone, Default)]
pub struct SuggestionRanker {
    config: RankerConfig,
}

impl SuggestionRanker {
    /// Creates a ranker with the default configuration.
    pub fn new() -> SuggestionRanker {
        SuggestionRanker::default()
    }

    /// Creates a ranker with a custom configuration.
    pub fn with_config(config: RankerConfig) -> SuggestionRanker {
        SuggestionRanker { config }
    }

    /// The configured suggestion limit.
    pub fn max_suggestions(&self) -> usize {
        self.config.max_suggestions
    }

    /// Ranks the lexicon against an input word.
    pub fn rank(
        &self,
        input: &str,
        lexicon: &Lexicon,
        feedback: &FeedbackStore,
    ) -> Vec<RankedCandidate> {
        let input = input.to_lowercase();

        let mut candidates: Vec<RankedCandidate> = lexicon
            .words()
            .iter()
            .map(|word| {
                RankedCandidate::new(
                    word.clone(),
                    levenshtein_distance(&input, word),
                    feedback.count(word),
                )
            })
            .collect();

        candidates.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then(b.feedback.cmp(&a.feedback))
        });
        candidates.truncate(self.config.max_suggestions);
        candidates
    }
}
