//! Spelling correction engine for Orthos.
//!
//! This module provides the checking core: an immutable vocabulary, four
//! single-edit candidate strategies, the checker that orchestrates them
//! behind a normalization pipeline, and line-oriented document checking.

pub mod checker;
pub mod document;
pub mod strategy;
pub mod vocabulary;

// Re-export commonly used types
pub use checker::{CheckResult, CheckerConfig, SpellChecker};
pub use document::{DocumentChecker, Misspelling};
pub use strategy::{
    DeleteStrategy, EditStrategy, InsertStrategy, ReplaceStrategy, SwapStrategy,
};
pub use vocabulary::Vocabulary;
