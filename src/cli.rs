//! Command-line interface for Orthos.
//!
//! The CLI is thin glue over the library: argument parsing, vocabulary
//! loading, and output rendering. The checking engine itself lives in
//! [`crate::spelling`].

pub mod args;
pub mod commands;
pub mod output;
