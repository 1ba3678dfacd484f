// src/lib.rs
// Public library surface for integration tests (and potential reuse).
//
// Document scoring engine for corporate-filing textual analysis: master
// dictionary loading, tokenization, per-document statistics, corpus-level
// TF-IDF weighting, and quintile ranking. Batch driving, persistence, and
// market-data acquisition are external collaborators.

pub mod batch;
pub mod config;
pub mod error;
pub mod filing;
pub mod lexicon;
pub mod quintile;
pub mod score;
pub mod terms;
pub mod tokenize;
pub mod weight;

// ---- Re-exports for stable public API ----
pub use crate::batch::{BatchSummary, DocumentSource, RawDocument};
pub use crate::config::EngineConfig;
pub use crate::error::{EngineError, Result};
pub use crate::lexicon::{Category, Lexicon, LexiconEntry, Modal};
pub use crate::quintile::{rank_quintiles, QuintileBucket};
pub use crate::score::{score_document, DocumentStatistics};
pub use crate::terms::{extract_term_records, TermRecord};
pub use crate::weight::{weight_documents, CorpusWeight};
