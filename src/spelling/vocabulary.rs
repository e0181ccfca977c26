//! Vocabulary management for spelling correction.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;

use crate::error::Result;

/// An immutable set of valid word forms.
///
/// Entries are stored exactly as they appear in the source: no case folding,
/// no filtering, no other normalization happens at load time. Sources are
/// split on whitespace only (never on hyphens), so `well-known` loads as a
/// single entry.
///
/// A vocabulary is constructed once, shared read-only for the lifetime of a
/// checking session, and never mutated afterwards, so any number of checks
/// may run against the same instance concurrently.
///
/// The vocabulary and the documents checked against it must use a consistent
/// character encoding; nothing here detects or converts encodings.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    words: AHashSet<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Vocabulary {
            words: AHashSet::new(),
        }
    }

    /// Build a vocabulary from an iterator of words.
    ///
    /// Words are inserted verbatim; duplicates collapse.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Vocabulary {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a vocabulary from a word-list file.
    ///
    /// Each line may contain one or more whitespace-separated tokens.
    /// Fails with an I/O error if the file cannot be read.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let vocabulary = Self::load_from_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %path.as_ref().display(),
            words = vocabulary.len(),
            "loaded vocabulary"
        );
        Ok(vocabulary)
    }

    /// Load a vocabulary from any buffered reader.
    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = AHashSet::new();
        for line in reader.lines() {
            let line = line?;
            for word in line.split_whitespace() {
                words.insert(word.to_string());
            }
        }
        Ok(Vocabulary { words })
    }

    /// Check if a word exists in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over all words in the vocabulary.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_from_words() {
        let vocabulary = Vocabulary::from_words(["cat", "dog", "cat"]);
        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.contains("cat"));
        assert!(vocabulary.contains("dog"));
        assert!(!vocabulary.contains("bird"));
    }

    #[test]
    fn test_load_from_reader_splits_whitespace_only() {
        let source = "cat dog\nwell-known\tbird\n\n  fish  \n";
        let vocabulary = Vocabulary::load_from_reader(Cursor::new(source)).unwrap();

        assert_eq!(vocabulary.len(), 5);
        assert!(vocabulary.contains("well-known"));
        assert!(!vocabulary.contains("well"));
        assert!(vocabulary.contains("fish"));
    }

    #[test]
    fn test_load_preserves_case() {
        let vocabulary = Vocabulary::load_from_reader(Cursor::new("Cat cat CAT")).unwrap();
        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.contains("Cat"));
        assert!(vocabulary.contains("CAT"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = Vocabulary::load_from_file("no/such/vocabulary.txt");
        assert!(matches!(
            result,
            Err(crate::error::OrthosError::Io(_))
        ));
    }

    #[test]
    fn test_empty_vocabulary() {
        let vocabulary = Vocabulary::new();
        assert!(vocabulary.is_empty());
        assert_eq!(vocabulary.words().count(), 0);
    }
}
