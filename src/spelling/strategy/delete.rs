//! Character deletion strategy implementation.

use std::collections::HashSet;

use super::EditStrategy;
use crate::spelling::vocabulary::Vocabulary;

/// A strategy that removes each character, one at a time.
///
/// Produces at most `len` candidate mutations; candidates are exactly one
/// character shorter than the input word.
#[derive(Clone, Debug, Default)]
pub struct DeleteStrategy;

impl DeleteStrategy {
    /// Create a new delete strategy.
    pub fn new() -> Self {
        DeleteStrategy
    }
}

impl EditStrategy for DeleteStrategy {
    fn candidates(&self, vocabulary: &Vocabulary, word: &str) -> HashSet<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut corrections = HashSet::new();

        for i in 0..chars.len() {
            let mut shortened = chars.clone();
            shortened.remove(i);
            let candidate: String = shortened.into_iter().collect();
            if vocabulary.contains(&candidate) {
                corrections.insert(candidate);
            }
        }

        corrections
    }

    fn name(&self) -> &'static str {
        "delete"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_finds_dropped_character() {
        let vocabulary = Vocabulary::from_words(["a"]);
        let candidates = DeleteStrategy::new().candidates(&vocabulary, "ab");

        // deleting index 1 yields "a"
        assert_eq!(candidates.len(), 1);
        assert!(candidates.contains("a"));
    }

    #[test]
    fn test_delete_shrinks_by_one() {
        let vocabulary = Vocabulary::from_words(["cat", "cats", "at"]);
        let candidates = DeleteStrategy::new().candidates(&vocabulary, "cart");

        for candidate in &candidates {
            assert_eq!(candidate.chars().count(), 3);
        }
        assert!(candidates.contains("cat"));
        assert!(!candidates.contains("cats"));
    }

    #[test]
    fn test_delete_empty_word() {
        let vocabulary = Vocabulary::from_words(["a"]);
        assert!(DeleteStrategy::new().candidates(&vocabulary, "").is_empty());
    }

    #[test]
    fn test_strategy_name() {
        assert_eq!(DeleteStrategy::new().name(), "delete");
    }
}
