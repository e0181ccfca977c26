//! Text analysis module for Orthos.
//!
//! This module provides the text analysis functionality the spell checking
//! engine is built on: tokenization of vocabulary and document sources, and
//! per-word normalization pipelines.

pub mod normalizer;
pub mod token;
pub mod tokenizer;
