//! Spell checker orchestration.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{AlphabeticNormalizer, LowercaseNormalizer, NormalizerPipeline};
use crate::spelling::strategy::{
    DeleteStrategy, EditStrategy, InsertStrategy, ReplaceStrategy, SwapStrategy,
};
use crate::spelling::vocabulary::Vocabulary;

/// Configuration for the spell checker.
///
/// Every strategy and normalization step defaults to enabled; the
/// configuration is resolved into explicit strategy and step lists when the
/// checker is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Whether to generate candidates by swapping adjacent characters.
    pub enable_swap: bool,
    /// Whether to generate candidates by deleting a character.
    pub enable_delete: bool,
    /// Whether to generate candidates by inserting an alphabet letter.
    pub enable_insert: bool,
    /// Whether to generate candidates by replacing a character.
    pub enable_replace: bool,
    /// Whether to strip non-alphabetic characters before checking.
    pub strip_non_alphabetic: bool,
    /// Whether to lowercase words before checking.
    pub fold_case: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            enable_swap: true,
            enable_delete: true,
            enable_insert: true,
            enable_replace: true,
            strip_non_alphabetic: true,
            fold_case: true,
        }
    }
}

/// Result of checking one token.
///
/// A correct token carries itself (the original, un-normalized form) as the
/// sole member of the correction set. A misspelled token carries the union
/// of every enabled strategy's candidates, which may be empty when no
/// correction could be found. The `correct` flag is authoritative: callers
/// never have to infer the verdict from the shape of the set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    original: String,
    correct: bool,
    corrections: HashSet<String>,
}

impl CheckResult {
    /// Create a result for a correctly spelled token.
    pub fn correct<S: Into<String>>(original: S) -> Self {
        let original = original.into();
        let corrections = HashSet::from([original.clone()]);
        CheckResult {
            original,
            correct: true,
            corrections,
        }
    }

    /// Create a result for a misspelled token with the given candidates.
    pub fn misspelled<S: Into<String>>(original: S, corrections: HashSet<String>) -> Self {
        CheckResult {
            original: original.into(),
            correct: false,
            corrections,
        }
    }

    /// The token exactly as it was passed to the checker.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Whether the token is correctly spelled.
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    /// The correction set.
    pub fn corrections(&self) -> &HashSet<String> {
        &self.corrections
    }

    /// Whether the result carries any correction candidates.
    ///
    /// Distinct from [`is_correct`](Self::is_correct): a misspelled token
    /// with no vocabulary neighbors has no suggestions.
    pub fn has_suggestions(&self) -> bool {
        !self.correct && !self.corrections.is_empty()
    }

    /// The corrections in lexicographic order, for deterministic rendering.
    pub fn sorted_corrections(&self) -> Vec<String> {
        let mut corrections: Vec<String> = self.corrections.iter().cloned().collect();
        corrections.sort();
        corrections
    }
}

/// The spell checker: vocabulary membership plus single-edit correction
/// search behind a normalization pipeline.
///
/// The checker is a stateless function of its configuration: `check` takes
/// `&self`, mutates nothing, and may be invoked concurrently from any number
/// of threads against the shared read-only vocabulary.
#[derive(Clone)]
pub struct SpellChecker {
    vocabulary: Arc<Vocabulary>,
    strategies: Vec<Arc<dyn EditStrategy>>,
    pipeline: NormalizerPipeline,
}

impl SpellChecker {
    /// Create a checker with the default configuration (everything enabled).
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self::with_config(vocabulary, CheckerConfig::default())
    }

    /// Create a checker with a custom configuration.
    ///
    /// The boolean gates resolve here into ordered lists: strategies run in
    /// swap, delete, insert, replace order; normalization strips
    /// non-alphabetic characters before folding case.
    pub fn with_config(vocabulary: Arc<Vocabulary>, config: CheckerConfig) -> Self {
        let mut strategies: Vec<Arc<dyn EditStrategy>> = Vec::new();
        if config.enable_swap {
            strategies.push(Arc::new(SwapStrategy::new()));
        }
        if config.enable_delete {
            strategies.push(Arc::new(DeleteStrategy::new()));
        }
        if config.enable_insert {
            strategies.push(Arc::new(InsertStrategy::new()));
        }
        if config.enable_replace {
            strategies.push(Arc::new(ReplaceStrategy::new()));
        }

        let mut pipeline = NormalizerPipeline::new();
        if config.strip_non_alphabetic {
            pipeline = pipeline.add_step(Arc::new(AlphabeticNormalizer::new()));
        }
        if config.fold_case {
            pipeline = pipeline.add_step(Arc::new(LowercaseNormalizer::new()));
        }

        SpellChecker {
            vocabulary,
            strategies,
            pipeline,
        }
    }

    /// Get the vocabulary this checker tests against.
    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// Get the enabled strategies, in the order they run.
    pub fn strategies(&self) -> &[Arc<dyn EditStrategy>] {
        &self.strategies
    }

    /// Get the normalization pipeline.
    pub fn pipeline(&self) -> &NormalizerPipeline {
        &self.pipeline
    }

    /// Check one token for correct spelling.
    ///
    /// The token is normalized, then tested for vocabulary membership. A
    /// token that normalizes to the empty string has nothing to check and
    /// is reported correct. Otherwise every enabled strategy runs against
    /// the normalized form and the results are unioned.
    pub fn check(&self, word: &str) -> CheckResult {
        let normalized = self.pipeline.apply(word);

        if normalized.is_empty() || self.vocabulary.contains(&normalized) {
            return CheckResult::correct(word);
        }

        let mut corrections = HashSet::new();
        for strategy in &self.strategies {
            corrections.extend(strategy.candidates(&self.vocabulary, &normalized));
        }
        CheckResult::misspelled(word, corrections)
    }
}
