//! Single-edit candidate strategies for spelling correction.
//!
//! Each strategy enumerates one kind of single-edit mutation of a misspelled
//! word and returns the mutations that exist in the vocabulary. The checker
//! unions the results of every enabled strategy; duplicates across
//! strategies collapse naturally since the results are sets.
//!
//! # Available Strategies
//!
//! - [`swap::SwapStrategy`] - Transposes adjacent characters
//! - [`delete::DeleteStrategy`] - Removes one character
//! - [`insert::InsertStrategy`] - Inserts one alphabet letter
//! - [`replace::ReplaceStrategy`] - Substitutes one alphabet letter
//!
//! # Examples
//!
//! ```
//! use orthos::spelling::strategy::{EditStrategy, SwapStrategy};
//! use orthos::spelling::vocabulary::Vocabulary;
//!
//! let vocabulary = Vocabulary::from_words(["cat", "cot", "cast"]);
//! let candidates = SwapStrategy::new().candidates(&vocabulary, "cta");
//! assert!(candidates.contains("cat"));
//! assert_eq!(candidates.len(), 1);
//! ```

use std::collections::HashSet;

use crate::spelling::vocabulary::Vocabulary;

/// The alphabet used by the insert and replace strategies.
///
/// Fixed lowercase `a-z`: with case folding enabled (the default) every
/// normalized word is lowercase and the alphabet covers it. With case
/// folding disabled, insert and replace cannot produce candidates that
/// contain characters outside this alphabet; swap and delete are unaffected
/// since they only rearrange or drop existing characters.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Trait for single-edit candidate strategies.
///
/// Implementations are pure: they never mutate the vocabulary and hold no
/// state of their own, so a strategy may be shared freely across concurrent
/// checks. Every returned candidate is guaranteed to be a vocabulary member.
pub trait EditStrategy: Send + Sync {
    /// Enumerate the single-edit neighbors of `word` present in `vocabulary`.
    fn candidates(&self, vocabulary: &Vocabulary, word: &str) -> HashSet<String>;

    /// Get the name of this strategy (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual strategy modules
pub mod delete;
pub mod insert;
pub mod replace;
pub mod swap;

// Re-export all strategies for convenient access
pub use delete::DeleteStrategy;
pub use insert::InsertStrategy;
pub use replace::ReplaceStrategy;
pub use swap::SwapStrategy;
