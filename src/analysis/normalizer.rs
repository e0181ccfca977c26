//! Word normalization for spell checking.
//!
//! This module provides the normalization steps applied to a token before
//! its spelling is checked. Steps are pure string transformations, chained
//! in a caller-specified order by [`NormalizerPipeline`].
//!
//! # Available Normalizers
//!
//! - [`alphabetic::AlphabeticNormalizer`] - Removes non-alphabetic characters
//! - [`lowercase::LowercaseNormalizer`] - Converts words to lowercase
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use orthos::analysis::normalizer::NormalizerPipeline;
//! use orthos::analysis::normalizer::alphabetic::AlphabeticNormalizer;
//! use orthos::analysis::normalizer::lowercase::LowercaseNormalizer;
//!
//! let pipeline = NormalizerPipeline::new()
//!     .add_step(Arc::new(AlphabeticNormalizer::new()))
//!     .add_step(Arc::new(LowercaseNormalizer::new()));
//!
//! assert_eq!(pipeline.apply("Can't"), "cant");
//! ```

use std::sync::Arc;

/// Trait for normalization steps that transform a word before checking.
///
/// Each step is a total function over strings: it never fails, and an empty
/// result is a valid outcome (the checker treats a word that normalizes to
/// the empty string as "nothing to check").
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Normalizer: Send + Sync {
    /// Normalize the given word.
    fn normalize(&self, word: &str) -> String;

    /// Get the name of this normalizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// An ordered chain of normalization steps.
///
/// Steps are applied left to right in the order they were added. The
/// reference order is alphabetic filtering, then case folding; callers
/// control which steps are included, not their relative order.
#[derive(Clone, Default)]
pub struct NormalizerPipeline {
    steps: Vec<Arc<dyn Normalizer>>,
}

impl NormalizerPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        NormalizerPipeline { steps: Vec::new() }
    }

    /// Add a normalization step to the end of the pipeline.
    pub fn add_step(mut self, step: Arc<dyn Normalizer>) -> Self {
        self.steps.push(step);
        self
    }

    /// Get the steps in this pipeline.
    pub fn steps(&self) -> &[Arc<dyn Normalizer>] {
        &self.steps
    }

    /// Check whether the pipeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Apply every step in order to the given word.
    pub fn apply(&self, word: &str) -> String {
        let mut word = word.to_string();
        for step in &self.steps {
            word = step.normalize(&word);
        }
        word
    }
}

impl std::fmt::Debug for NormalizerPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.steps.iter().map(|s| s.name()).collect();
        f.debug_struct("NormalizerPipeline")
            .field("steps", &names)
            .finish()
    }
}

// Individual normalizer modules
pub mod alphabetic;
pub mod lowercase;

// Re-export all normalizers for convenient access
pub use alphabetic::AlphabeticNormalizer;
pub use lowercase::LowercaseNormalizer;
