//! Command implementations for the Orthos CLI.

use std::env;
use std::fs;
use std::process::{Command as ProcessCommand, Stdio};
use std::sync::Arc;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::checker::SpellChecker;
use crate::spelling::document::DocumentChecker;
use crate::spelling::vocabulary::Vocabulary;

/// Execute a CLI command.
pub fn execute_command(args: OrthosArgs) -> Result<()> {
    match &args.command {
        Command::Word(word_args) => check_word(word_args.clone(), &args),
        Command::Document(document_args) => check_document(document_args.clone(), &args),
    }
}

/// Build a spell checker from the shared checking options.
fn build_checker(options: &CheckOptions) -> Result<SpellChecker> {
    let vocabulary = Arc::new(Vocabulary::load_from_file(&options.vocabulary)?);
    Ok(SpellChecker::with_config(
        vocabulary,
        options.checker_config(),
    ))
}

/// Check a single word.
fn check_word(args: WordArgs, cli_args: &OrthosArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Using vocabulary: {}", args.check.vocabulary.display());
    }

    let checker = build_checker(&args.check)?;
    let result = checker.check(&args.word);
    print_word_result(&result);
    Ok(())
}

/// Check a document file.
fn check_document(args: DocumentArgs, cli_args: &OrthosArgs) -> Result<()> {
    if args.console {
        return relaunch_detached();
    }

    if cli_args.verbosity() > 1 {
        println!("Checking document: {}", args.path.display());
        println!("Using vocabulary: {}", args.check.vocabulary.display());
    }

    let checker = DocumentChecker::new(build_checker(&args.check)?)?;

    let misspellings = if args.parallel {
        let text = fs::read_to_string(&args.path)?;
        checker.check_text_parallel(&text)?
    } else {
        checker.check_file(&args.path)?
    };

    print_misspellings(&misspellings, args.format)?;

    if cli_args.verbosity() > 0 && misspellings.is_empty() {
        println!("No spelling errors found.");
    }
    Ok(())
}

/// Re-spawn the current executable with `--console` stripped, detached from
/// the calling terminal. The child runs the same report; this process
/// returns immediately.
fn relaunch_detached() -> Result<()> {
    let exe = env::current_exe()?;
    let args: Vec<String> = env::args().skip(1).filter(|a| a != "--console").collect();

    ProcessCommand::new(exe)
        .args(args)
        .stdin(Stdio::null())
        .spawn()?;
    Ok(())
}
