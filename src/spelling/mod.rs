//! Suggestion ranking for misrecognized words.
//!
//! When a decoded word is not in the lexicon, this module scores every known
//! word by edit distance, biases ties with accepted-suggestion feedback, and
//! produces the ordered "Did you mean?" list.

pub mod feedback;
pub mod levenshtein;
pub mod ranker;

pub use feedback::FeedbackStore;
pub use levenshtein::levenshtein_distance;
pub use ranker::{DEFAULT_MAX_SUGGESTIONS, RankedCandidate, RankerConfig, SuggestionRanker};
