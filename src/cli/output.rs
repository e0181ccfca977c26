//! Output formatting for CLI commands.

use std::io::Write;

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::spelling::checker::CheckResult;
use crate::spelling::document::Misspelling;

/// Width of the misspelled-word column in table output.
const WORD_COLUMN_WIDTH: usize = 15;

/// Print the result of checking a single word.
///
/// A correct word, a misspelled word with suggestions, and a misspelled
/// word with no suggestions each render distinctly.
pub fn print_word_result(result: &CheckResult) {
    if result.is_correct() {
        println!("Spelling is ok: {}", result.original());
    } else if result.has_suggestions() {
        println!(
            "Unknown word: '{}' >> {:?}",
            result.original(),
            result.sorted_corrections()
        );
    } else {
        println!("Unknown word: '{}' >> no suggestions", result.original());
    }
}

/// Print a document misspelling report in the requested format.
pub fn print_misspellings(misspellings: &[Misspelling], format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_misspellings(&mut out, misspellings, format)
}

/// Write a document misspelling report to any writer.
pub fn write_misspellings<W: Write>(
    out: &mut W,
    misspellings: &[Misspelling],
    format: OutputFormat,
) -> Result<()> {
    for misspelling in misspellings {
        match format {
            OutputFormat::Raw => {
                writeln!(
                    out,
                    "({}, '{}', {:?})",
                    misspelling.line, misspelling.word, misspelling.corrections
                )?;
            }
            OutputFormat::Table => {
                let quoted = format!("'{}'", misspelling.word);
                writeln!(
                    out,
                    "{} >> {:>width$} >> {:?}",
                    misspelling.line,
                    quoted,
                    misspelling.corrections,
                    width = WORD_COLUMN_WIDTH
                )?;
            }
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string(misspelling)?)?;
            }
        }
    }
    Ok(())
}
