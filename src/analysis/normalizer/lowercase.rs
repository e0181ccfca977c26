//! Lowercase normalizer implementation.

use super::Normalizer;

/// A normalizer that converts a word to lowercase.
///
/// Case folding lets a vocabulary of lowercase forms match capitalized
/// occurrences, and keeps the candidate strategies' lowercase alphabet
/// effective.
#[derive(Clone, Debug, Default)]
pub struct LowercaseNormalizer;

impl LowercaseNormalizer {
    /// Create a new lowercase normalizer.
    pub fn new() -> Self {
        LowercaseNormalizer
    }
}

impl Normalizer for LowercaseNormalizer {
    fn normalize(&self, word: &str) -> String {
        word.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
