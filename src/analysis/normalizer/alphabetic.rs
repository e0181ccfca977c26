//! Alphabetic filter normalizer implementation.

use super::Normalizer;

/// A normalizer that removes characters outside the ranges `a-z` and `A-Z`.
///
/// Digits, punctuation, and whitespace are all dropped; a word made up
/// entirely of such characters normalizes to the empty string.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticNormalizer;

impl AlphabeticNormalizer {
    /// Create a new alphabetic normalizer.
    pub fn new() -> Self {
        AlphabeticNormalizer
    }
}

impl Normalizer for AlphabeticNormalizer {
    fn normalize(&self, word: &str) -> String {
        word.chars().filter(|c| c.is_ascii_alphabetic()).collect()
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}
