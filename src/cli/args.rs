//! Command line argument parsing for the Orthos CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::spelling::checker::CheckerConfig;

/// Orthos - vocabulary-backed spell checking
#[derive(Parser, Debug, Clone)]
#[command(name = "orthos")]
#[command(about = "Vocabulary-backed spell checking with single-edit corrections")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = "Check spelling by testing words for membership in a vocabulary \
set. Possible corrections are obtained by mutating each misspelled word (adjacent \
character swaps, character deletion, insertion of alphabet characters, and character \
replacement) and testing the mutated words for membership in the vocabulary set. \
Words are formatted before their membership is tested: non-alphabet characters are \
removed and the word is lowercased. Every mutation and formatting operation can be \
switched off with the appropriate flag.")]
pub struct OrthosArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OrthosArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check the spelling of a single word
    Word(WordArgs),

    /// Check every word in a document
    Document(DocumentArgs),
}

/// Options shared by every checking command.
#[derive(Parser, Debug, Clone)]
pub struct CheckOptions {
    /// Path to the vocabulary file
    #[arg(long, value_name = "VOCABULARY_FILE", default_value = "vocabulary.txt")]
    pub vocabulary: PathBuf,

    /// Do not swap adjacent characters when searching for corrections
    #[arg(long)]
    pub no_swap: bool,

    /// Do not delete characters when searching for corrections
    #[arg(long)]
    pub no_delete: bool,

    /// Do not insert alphabet characters when searching for corrections
    #[arg(long)]
    pub no_insert: bool,

    /// Do not replace characters when searching for corrections
    #[arg(long)]
    pub no_replace: bool,

    /// Keep non-alphabet characters when checking spelling
    #[arg(long)]
    pub no_alphabetic: bool,

    /// Keep the original casing when checking spelling
    #[arg(long)]
    pub no_lowercase: bool,
}

impl CheckOptions {
    /// Resolve the disable flags into a checker configuration.
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig {
            enable_swap: !self.no_swap,
            enable_delete: !self.no_delete,
            enable_insert: !self.no_insert,
            enable_replace: !self.no_replace,
            strip_non_alphabetic: !self.no_alphabetic,
            fold_case: !self.no_lowercase,
        }
    }
}

/// Arguments for checking a single word
#[derive(Parser, Debug, Clone)]
pub struct WordArgs {
    /// Word to check for spelling errors
    #[arg(value_name = "WORD")]
    pub word: String,

    #[command(flatten)]
    pub check: CheckOptions,
}

/// Arguments for checking a document
#[derive(Parser, Debug, Clone)]
pub struct DocumentArgs {
    /// Path to the document in need of spell checking
    #[arg(value_name = "DOCUMENT_PATH")]
    pub path: PathBuf,

    #[command(flatten)]
    pub check: CheckOptions,

    /// Output format for the misspelling report
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Raw)]
    pub format: OutputFormat,

    /// Check lines in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Run the report in a separate detached process
    #[arg(long)]
    pub console: bool,
}

/// Output format for document reports
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    /// One entry per line in raw form
    Raw,
    /// Fixed-width table with the misspelled word right-aligned
    Table,
    /// JSON output, one object per line
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word_command() {
        let args = OrthosArgs::parse_from(["orthos", "word", "teh"]);
        match args.command {
            Command::Word(word) => {
                assert_eq!(word.word, "teh");
                assert_eq!(word.check.vocabulary, PathBuf::from("vocabulary.txt"));
            }
            _ => panic!("expected word subcommand"),
        }
    }

    #[test]
    fn test_disable_flags_invert_into_config() {
        let args =
            OrthosArgs::parse_from(["orthos", "word", "teh", "--no-insert", "--no-lowercase"]);
        let Command::Word(word) = args.command else {
            panic!("expected word subcommand");
        };

        let config = word.check.checker_config();
        assert!(config.enable_swap);
        assert!(config.enable_delete);
        assert!(!config.enable_insert);
        assert!(config.enable_replace);
        assert!(config.strip_non_alphabetic);
        assert!(!config.fold_case);
    }

    #[test]
    fn test_parse_document_command() {
        let args = OrthosArgs::parse_from([
            "orthos",
            "document",
            "report.txt",
            "--vocabulary",
            "words.txt",
            "--format",
            "table",
            "--parallel",
        ]);
        let Command::Document(doc) = args.command else {
            panic!("expected document subcommand");
        };

        assert_eq!(doc.path, PathBuf::from("report.txt"));
        assert_eq!(doc.check.vocabulary, PathBuf::from("words.txt"));
        assert!(matches!(doc.format, OutputFormat::Table));
        assert!(doc.parallel);
        assert!(!doc.console);
    }

    #[test]
    fn test_verbosity_levels() {
        let args = OrthosArgs::parse_from(["orthos", "word", "teh", "-vv"]);
        assert_eq!(args.verbosity(), 2);

        let args = OrthosArgs::parse_from(["orthos", "word", "teh"]);
        assert_eq!(args.verbosity(), 1);

        let args = OrthosArgs::parse_from(["orthos", "word", "teh", "--quiet"]);
        assert_eq!(args.verbosity(), 0);
    }
}
