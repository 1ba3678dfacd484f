// src/weight.rs
//! # Corpus Weighter
//! Log-dampened TF-IDF aggregation over the full term-record set of a
//! corpus. The weight of a document is corpus-relative: `N` and the document
//! frequencies are recomputed from the record set on every call, so a
//! document's weight changes with the composition of the batch it is scored
//! within.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::terms::TermRecord;

/// Aggregate sentiment-intensity weight of one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusWeight {
    pub identifier: String,
    pub weight: f64,
}

/// Compute per-document aggregate weights from the complete record set.
///
/// Per record: `((1 + ln tf) / (1 + ln a)) * ln(N / df)` where `tf` is the
/// term frequency, `a` the document's relevant-token total, `N` the distinct
/// document count, and `df` the word's document frequency. Records with
/// `tf < 1` or `a <= 0` contribute zero. Output order follows the first
/// appearance of each document in the record set.
pub fn weight_documents(records: &[TermRecord]) -> Vec<CorpusWeight> {
    let mut doc_frequency: HashMap<&str, HashSet<&str>> = HashMap::new();
    let mut documents: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for rec in records {
        doc_frequency
            .entry(rec.word.as_str())
            .or_default()
            .insert(rec.identifier.as_str());
        if seen.insert(rec.identifier.as_str()) {
            documents.push(rec.identifier.as_str());
        }
    }
    let n = documents.len() as f64;

    let mut totals: HashMap<&str, f64> = documents.iter().map(|d| (*d, 0.0)).collect();
    for rec in records {
        let df = match doc_frequency.get(rec.word.as_str()) {
            Some(docs) => docs.len() as f64,
            None => {
                // Cannot happen by construction; a firing here means the
                // record set was mutated mid-pass.
                warn!(word = %rec.word, "missing document frequency, defaulting to 1");
                1.0
            }
        };
        if rec.term_frequency >= 1 && rec.doc_total > 0 {
            let tf = rec.term_frequency as f64;
            let a = rec.doc_total as f64;
            let w = ((1.0 + tf.ln()) / (1.0 + a.ln())) * (n / df).ln();
            if let Some(total) = totals.get_mut(rec.identifier.as_str()) {
                *total += w;
            }
        }
    }

    documents
        .into_iter()
        .map(|d| CorpusWeight {
            identifier: d.to_string(),
            weight: totals[d],
        })
        .collect()
}
