// src/tokenize.rs
//! # Tokenizer
//! Normalization and token extraction for filing text. Two modes:
//!
//! * full-document mode ([`tokenize`]): uppercase, then maximal `\w+` runs —
//!   punctuation and whitespace are boundaries, so "CASH-FLOW" splits into
//!   CASH and FLOW;
//! * strict word mode ([`tokenize_words`]): maximal runs of two or more
//!   uppercase letters only, used for sentiment-frequency analysis against a
//!   category-filtered word list.
//!
//! Both are pure functions over their input; the only statics are compiled
//! regexes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon::Lexicon;

static RE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word regex"));
static RE_STRICT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z]{2,}\b").expect("strict regex"));
// The month "May" collides with the modal verb and would corrupt modal
// counts; it is removed as a standalone token before scoring.
static RE_MAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bMAY\b").expect("may regex"));

/// Replace every standalone "MAY" token (any case) with a space.
pub fn redact_month_may(text: &str) -> String {
    RE_MAY.replace_all(text, " ").into_owned()
}

/// Full-document mode: uppercase the input, then emit every maximal run of
/// word characters (letters, digits, underscore) in order.
pub fn tokenize(text: &str) -> Vec<String> {
    let upper = text.to_uppercase();
    RE_WORD
        .find_iter(&upper)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Strict word mode: uppercase the input, then emit maximal runs of two or
/// more ASCII uppercase letters (no digits, no underscore).
pub fn tokenize_words(text: &str) -> Vec<String> {
    let upper = text.to_uppercase();
    RE_STRICT
        .find_iter(&upper)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// A token counts toward document statistics only if it is not purely
/// numeric, is longer than one character, and is a dictionary word.
pub fn is_lexicon_eligible(token: &str, lexicon: &Lexicon) -> bool {
    !is_all_digits(token) && token.chars().count() > 1 && lexicon.contains(token)
}

fn is_all_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
