// src/score.rs
//! # Document Scorer
//! Pure scoring of one filing against the master dictionary: word counts,
//! category percentages, character/number counts, syllable and length
//! averages, vocabulary. No I/O; suitable for unit tests and for fan-out
//! across a worker pool.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

use crate::config::EngineConfig;
use crate::filing;
use crate::lexicon::Lexicon;
use crate::tokenize::{is_lexicon_eligible, redact_month_may, tokenize};

/// Per-document statistics record.
///
/// Field order is the external output contract: identifier, size, word
/// count, the eight category percentages, character/number counts, the two
/// averages, vocabulary, entity id. Serialization preserves this order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentStatistics {
    pub identifier: String,
    /// Raw byte length of the document before any normalization.
    pub file_size: u64,
    /// Count of lexicon-matched words.
    pub word_count: u64,
    pub pct_negative: f64,
    pub pct_positive: f64,
    pub pct_uncertainty: f64,
    pub pct_litigious: f64,
    pub pct_strong_modal: f64,
    pub pct_weak_modal: f64,
    pub pct_constraining: f64,
    pub pct_complexity: f64,
    /// Alphabetic characters over the whole document.
    pub alphabetic_chars: u64,
    /// Digit characters over the whole document.
    pub digit_chars: u64,
    /// Standalone numbers (maximal digit runs with optional sign/currency
    /// prefix and parentheses).
    pub numbers: u64,
    pub avg_syllables: f64,
    pub avg_word_length: f64,
    /// Distinct matched words.
    pub vocabulary: u64,
    pub entity_id: String,
}

/// Running category counters; moderate-modal is tracked but never emitted.
#[derive(Debug, Default)]
struct CategoryCounts {
    negative: u64,
    positive: u64,
    uncertainty: u64,
    litigious: u64,
    strong_modal: u64,
    moderate_modal: u64,
    weak_modal: u64,
    constraining: u64,
    complexity: u64,
}

/// Score one document. The month token "MAY" is redacted before tokenizing
/// so it cannot inflate the modal-word counts.
pub fn score_document(
    identifier: &str,
    raw_text: &str,
    lexicon: &Lexicon,
    config: &EngineConfig,
) -> DocumentStatistics {
    let file_size = raw_text.len() as u64;
    let doc = redact_month_may(raw_text).to_uppercase();

    let mut word_count = 0u64;
    let mut total_syllables = 0u64;
    let mut total_word_length = 0u64;
    let mut vocabulary: HashSet<String> = HashSet::new();
    let mut counts = CategoryCounts::default();

    for token in tokenize(&doc) {
        if !is_lexicon_eligible(&token, lexicon) {
            continue;
        }
        // Eligibility implies presence in the lexicon.
        let Some(entry) = lexicon.lookup(&token) else {
            continue;
        };
        word_count += 1;
        total_word_length += token.chars().count() as u64;
        total_syllables += u64::from(entry.syllables);
        if entry.negative {
            counts.negative += 1;
        }
        if entry.positive {
            counts.positive += 1;
        }
        if entry.uncertainty {
            counts.uncertainty += 1;
        }
        if entry.litigious {
            counts.litigious += 1;
        }
        if entry.strong_modal() {
            counts.strong_modal += 1;
        }
        if entry.moderate_modal() {
            counts.moderate_modal += 1;
        }
        if entry.weak_modal() {
            counts.weak_modal += 1;
        }
        if entry.constraining {
            counts.constraining += 1;
        }
        if entry.complexity {
            counts.complexity += 1;
        }
        vocabulary.insert(token);
    }

    // Character classification runs over the whole document, not just
    // matched tokens. The number counter works on its own copy below, so
    // these counts are unaffected by the punctuation stripping.
    let mut alphabetic_chars = 0u64;
    let mut digit_chars = 0u64;
    for c in doc.chars() {
        if c.is_ascii_uppercase() {
            alphabetic_chars += 1;
        } else if c.is_ascii_digit() {
            digit_chars += 1;
        }
    }
    let numbers = count_numbers(&doc, &config.currency_symbols);

    // Explicit zero-guard: a document with no matched words reports defined
    // zeros, not NaNs.
    let (pcts, avg_syllables, avg_word_length) = if word_count == 0 {
        ([0.0; 8], 0.0, 0.0)
    } else {
        let n = word_count as f64;
        let pct = |c: u64| (c as f64 / n) * 100.0;
        (
            [
                pct(counts.negative),
                pct(counts.positive),
                pct(counts.uncertainty),
                pct(counts.litigious),
                pct(counts.strong_modal),
                pct(counts.weak_modal),
                pct(counts.constraining),
                pct(counts.complexity),
            ],
            total_syllables as f64 / n,
            total_word_length as f64 / n,
        )
    };

    DocumentStatistics {
        identifier: identifier.to_string(),
        file_size,
        word_count,
        pct_negative: pcts[0],
        pct_positive: pcts[1],
        pct_uncertainty: pcts[2],
        pct_litigious: pcts[3],
        pct_strong_modal: pcts[4],
        pct_weak_modal: pcts[5],
        pct_constraining: pcts[6],
        pct_complexity: pcts[7],
        alphabetic_chars,
        digit_chars,
        numbers,
        avg_syllables,
        avg_word_length,
        vocabulary: vocabulary.len() as u64,
        entity_id: filing::entity_id(identifier).to_string(),
    }
}

/// Count standalone numbers on a scratch copy of the document: first drop
/// `.`/`,` separators that run into a digit (thousands separators, decimal
/// points), then turn all remaining ASCII punctuation into spaces, then count
/// digit runs with their optional sign/currency prefixes.
pub fn count_numbers(doc: &str, currency_symbols: &[char]) -> u64 {
    let mut scratch = String::with_capacity(doc.len());
    let mut chars = doc.chars().peekable();
    while let Some(c) = chars.next() {
        if (c == '.' || c == ',') && chars.peek().is_some_and(|n| n.is_ascii_digit()) {
            continue;
        }
        if c.is_ascii_punctuation() {
            scratch.push(' ');
        } else {
            scratch.push(c);
        }
    }
    number_pattern(currency_symbols)
        .find_iter(&scratch)
        .count() as u64
}

fn number_pattern(currency_symbols: &[char]) -> Regex {
    let syms: String = currency_symbols
        .iter()
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    let currency = if syms.is_empty() {
        String::new()
    } else {
        format!("[{syms}]?")
    };
    Regex::new(&format!(r"\b[-+(]?{currency}[-+(]?\d+\)?\b")).expect("number regex")
}
