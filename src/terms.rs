// src/terms.rs
//! Per-(document, word) term-frequency records, the input of the corpus
//! weighter. Extraction runs in strict word mode against an arbitrary word
//! set: the whole master dictionary, one sentiment category, or the
//! Harvard-IV negative list.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::filing;
use crate::tokenize::tokenize_words;

/// One (document, word) pair with its within-document frequency and the
/// document's total relevant-token count (the normalization denominator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermRecord {
    pub identifier: String,
    pub entity_id: String,
    pub word: String,
    /// Occurrences of `word` in this document; always >= 1.
    pub term_frequency: u64,
    /// Count of all word-set hits in this document; always >= term_frequency.
    pub doc_total: u64,
}

/// Extract term records for one document against a word set.
///
/// Returns an empty vector when no token hits the set (a zero-relevant-token
/// document produces no records, mirroring its zero contribution to the
/// corpus weight). Records come out in word order for determinism.
pub fn extract_term_records(
    identifier: &str,
    text: &str,
    words: &HashSet<String>,
) -> Vec<TermRecord> {
    let mut tf: BTreeMap<String, u64> = BTreeMap::new();
    let mut doc_total = 0u64;
    for token in tokenize_words(text) {
        if words.contains(&token) {
            doc_total += 1;
            *tf.entry(token).or_insert(0) += 1;
        }
    }
    let entity_id = filing::entity_id(identifier).to_string();
    tf.into_iter()
        .map(|(word, term_frequency)| TermRecord {
            identifier: identifier.to_string(),
            entity_id: entity_id.clone(),
            word,
            term_frequency,
            doc_total,
        })
        .collect()
}
