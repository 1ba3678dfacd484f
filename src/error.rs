// src/error.rs
//! Engine error taxonomy.
//!
//! Per-item failures (one lexicon row, one document) are contained by their
//! callers and reported through tracing; they never abort a batch. Corpus-level
//! failures (too few distinct weights for quintile binning) are hard errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// A lexicon source row that could not be parsed. The loader skips the
    /// row and keeps this only as a diagnostic value.
    #[error("malformed lexicon record at line {line}: {reason}")]
    MalformedLexiconRecord { line: usize, reason: String },

    /// A document that could not be read or decoded. The batch driver skips
    /// the document and continues.
    #[error("failed to read document '{identifier}': {reason}")]
    DocumentRead { identifier: String, reason: String },

    /// Quintile ranking over fewer than 5 distinct weight values. The
    /// statistic would be meaningless, so this is fatal to the ranking call.
    #[error("quintile ranking requires at least 5 distinct weights, got {distinct}")]
    InsufficientData { distinct: usize },

    /// A tabular source whose header lacks a required column.
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
