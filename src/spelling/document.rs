//! Line-oriented document checking.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;
use crate::spelling::checker::SpellChecker;

/// One misspelled word found in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Misspelling {
    /// Zero-based index of the line the word was found on.
    pub line: usize,
    /// The word exactly as it appeared in the document.
    pub word: String,
    /// Correction candidates, sorted lexicographically. Empty when no
    /// single-edit neighbor of the word exists in the vocabulary.
    pub corrections: Vec<String>,
}

/// Checks documents line by line against a [`SpellChecker`].
///
/// Each line is split into words on runs of whitespace and hyphens; every
/// word is checked and the misspelled ones are collected together with
/// their zero-based line index.
#[derive(Clone)]
pub struct DocumentChecker {
    checker: SpellChecker,
    tokenizer: RegexTokenizer,
}

impl DocumentChecker {
    /// Create a document checker around the given spell checker.
    pub fn new(checker: SpellChecker) -> Result<Self> {
        Ok(DocumentChecker {
            checker,
            tokenizer: RegexTokenizer::word_boundaries()?,
        })
    }

    /// Get the underlying spell checker.
    pub fn checker(&self) -> &SpellChecker {
        &self.checker
    }

    /// Check a document file.
    ///
    /// Fails with an I/O error if the file cannot be read; the run has no
    /// partial or retry semantics.
    pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Misspelling>> {
        let file = File::open(path.as_ref())?;
        let misspellings = self.check_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %path.as_ref().display(),
            misspellings = misspellings.len(),
            "checked document"
        );
        Ok(misspellings)
    }

    /// Check lines from any buffered reader.
    pub fn check_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Misspelling>> {
        let mut misspellings = Vec::new();
        for (line_index, line) in reader.lines().enumerate() {
            let line = line?;
            self.check_line(line_index, &line, &mut misspellings)?;
        }
        Ok(misspellings)
    }

    /// Check an in-memory document.
    pub fn check_text(&self, text: &str) -> Result<Vec<Misspelling>> {
        let mut misspellings = Vec::new();
        for (line_index, line) in text.lines().enumerate() {
            self.check_line(line_index, line, &mut misspellings)?;
        }
        Ok(misspellings)
    }

    /// Check an in-memory document with one rayon task per line.
    ///
    /// Lines are independent: every task shares the same immutable checker
    /// and vocabulary, and the collected results keep line order.
    pub fn check_text_parallel(&self, text: &str) -> Result<Vec<Misspelling>> {
        let lines: Vec<&str> = text.lines().collect();
        let per_line: Vec<Vec<Misspelling>> = lines
            .par_iter()
            .enumerate()
            .map(|(line_index, line)| -> Result<Vec<Misspelling>> {
                let mut misspellings = Vec::new();
                self.check_line(line_index, line, &mut misspellings)?;
                Ok(misspellings)
            })
            .collect::<Result<_>>()?;
        Ok(per_line.into_iter().flatten().collect())
    }

    fn check_line(
        &self,
        line_index: usize,
        line: &str,
        misspellings: &mut Vec<Misspelling>,
    ) -> Result<()> {
        for token in self.tokenizer.tokenize(line)? {
            let result = self.checker.check(&token.text);
            if !result.is_correct() {
                misspellings.push(Misspelling {
                    line: line_index,
                    word: token.text,
                    corrections: result.sorted_corrections(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::spelling::checker::CheckerConfig;
    use crate::spelling::vocabulary::Vocabulary;

    fn document_checker() -> DocumentChecker {
        let vocabulary = Arc::new(Vocabulary::from_words([
            "the", "cat", "sat", "on", "a", "mat",
        ]));
        DocumentChecker::new(SpellChecker::new(vocabulary)).unwrap()
    }

    #[test]
    fn test_check_text_reports_line_indices() {
        let checker = document_checker();
        let misspellings = checker
            .check_text("the cat\nsat on teh mat\n")
            .unwrap();

        assert_eq!(misspellings.len(), 1);
        assert_eq!(misspellings[0].line, 1);
        assert_eq!(misspellings[0].word, "teh");
        assert_eq!(misspellings[0].corrections, vec!["the".to_string()]);
    }

    #[test]
    fn test_check_text_splits_hyphen_runs() {
        let checker = document_checker();
        let misspellings = checker.check_text("cat-mat-dog").unwrap();

        assert_eq!(misspellings.len(), 1);
        assert_eq!(misspellings[0].word, "dog");
    }

    #[test]
    fn test_check_text_punctuation_tokens_are_correct() {
        let checker = document_checker();
        let misspellings = checker.check_text("the cat !!! sat").unwrap();
        assert!(misspellings.is_empty());
    }

    #[test]
    fn test_check_text_empty_correction_set() {
        let checker = document_checker();
        let misspellings = checker.check_text("zzzzzz").unwrap();

        assert_eq!(misspellings.len(), 1);
        assert!(misspellings[0].corrections.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let checker = document_checker();
        let text = "the cta sat\nno teh mat\nzzzzzz on a-mat\n";

        let sequential = checker.check_text(text).unwrap();
        let parallel = checker.check_text_parallel(text).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_disabled_normalization_checks_raw_tokens() {
        let vocabulary = Arc::new(Vocabulary::from_words(["Cat", "mat"]));
        let config = CheckerConfig {
            strip_non_alphabetic: false,
            fold_case: false,
            ..CheckerConfig::default()
        };
        let checker =
            DocumentChecker::new(SpellChecker::with_config(vocabulary, config)).unwrap();

        let misspellings = checker.check_text("Cat cat").unwrap();
        assert_eq!(misspellings.len(), 1);
        assert_eq!(misspellings[0].word, "cat");
    }
}
