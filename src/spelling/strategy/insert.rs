//! Character insertion strategy implementation.

use std::collections::HashSet;

use super::{ALPHABET, EditStrategy};
use crate::spelling::vocabulary::Vocabulary;

/// A strategy that inserts each alphabet letter at each gap position.
///
/// Gap positions run from before the first character to after the last, so
/// the strategy produces at most `(len + 1) * 26` candidate mutations, each
/// exactly one character longer than the input word. See [`ALPHABET`] for
/// the letter set.
#[derive(Clone, Debug, Default)]
pub struct InsertStrategy;

impl InsertStrategy {
    /// Create a new insert strategy.
    pub fn new() -> Self {
        InsertStrategy
    }
}

impl EditStrategy for InsertStrategy {
    fn candidates(&self, vocabulary: &Vocabulary, word: &str) -> HashSet<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut corrections = HashSet::new();

        for i in 0..=chars.len() {
            for letter in ALPHABET.chars() {
                let mut extended = chars.clone();
                extended.insert(i, letter);
                let candidate: String = extended.into_iter().collect();
                if vocabulary.contains(&candidate) {
                    corrections.insert(candidate);
                }
            }
        }

        corrections
    }

    fn name(&self) -> &'static str {
        "insert"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_finds_missing_character() {
        let vocabulary = Vocabulary::from_words(["hello"]);
        let candidates = InsertStrategy::new().candidates(&vocabulary, "helo");

        // inserting "l" at position 3 yields "hello"
        assert!(candidates.contains("hello"));
    }

    #[test]
    fn test_insert_grows_by_one() {
        let vocabulary = Vocabulary::from_words(["cat", "cast", "coast"]);
        let candidates = InsertStrategy::new().candidates(&vocabulary, "cat");

        for candidate in &candidates {
            assert_eq!(candidate.chars().count(), 4);
        }
        assert!(candidates.contains("cast"));
    }

    #[test]
    fn test_insert_at_both_ends() {
        let vocabulary = Vocabulary::from_words(["scat", "cats"]);
        let candidates = InsertStrategy::new().candidates(&vocabulary, "cat");

        assert!(candidates.contains("scat"));
        assert!(candidates.contains("cats"));
    }

    #[test]
    fn test_insert_empty_word() {
        let vocabulary = Vocabulary::from_words(["a", "i", "ab"]);
        let candidates = InsertStrategy::new().candidates(&vocabulary, "");

        // one gap position, 26 letters: single-letter vocabulary hits only
        assert_eq!(candidates.len(), 2);
        assert!(candidates.contains("a"));
        assert!(candidates.contains("i"));
    }

    #[test]
    fn test_strategy_name() {
        assert_eq!(InsertStrategy::new().name(), "insert");
    }
}
