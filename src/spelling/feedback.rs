//! Per-session reinforcement counts for accepted suggestions.

use ahash::AHashMap;

/// Counts how often each word has been accepted as a correction.
///
/// Counts are held in memory for the lifetime of the engine and bias ranking
/// toward words the user has picked before. An unknown word has count zero.
#[derive(Debug, Clone, Default)]
pub struct FeedbackStore {
    counts: AHashMap<String, u32>,
}

impl FeedbackStore {
    /// Creates an empty store.
    pub fn new() -> FeedbackStore {
        FeedbackStore::default()
    }

    /// Records one acceptance of a word.
    pub fn reinforce(&mut self, word: &str) {
        let count = self.counts.entry(word.to_lowercase()).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Number of times the word has been accepted.
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Total acceptances across all words.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Number of distinct words with feedback.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no feedback has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_word_has_zero_count() {
        let store = FeedbackStore::new();
        assert_eq!(store.count("call"), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_reinforce_accumulates() {
        let mut store = FeedbackStore::new();
        store.reinforce("ball");
        store.reinforce("ball");
        store.reinforce("call");
        assert_eq!(store.count("ball"), 2);
        assert_eq!(store.count("call"), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.total(), 3);
    }

    #[test]
    fn test_counts_are_case_insensitive() {
        let mut store = FeedbackStore::new();
        store.reinforce("Ball");
        store.reinforce("BALL");
        assert_eq!(store.count("ball"), 2);
        assert_eq!(store.len(), 1);
    }
}
