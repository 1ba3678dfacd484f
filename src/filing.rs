// src/filing.rs
//! Filing-identifier conventions.
//!
//! Document identifiers encode two join keys for downstream consumers: the
//! entity id (CIK) as the leading `_`-delimited segment, and an 8-digit
//! filing date somewhere in the identifier. Both conventions must be kept
//! stable; results are re-keyed on them externally.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{8}").expect("date regex"));
static RE_EDGAR_CIK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"edgar_data_(\d+)_").expect("edgar cik regex"));

/// Leading `_`-delimited segment of the identifier, or `"unknown"` when the
/// identifier carries no underscore at all.
pub fn entity_id(identifier: &str) -> &str {
    match identifier.split_once('_') {
        Some((head, _)) => head,
        None => "unknown",
    }
}

/// First 8-digit run in the identifier parsed as a `YYYYMMDD` date.
/// `None` when absent or not a valid calendar date.
pub fn filing_date(identifier: &str) -> Option<NaiveDate> {
    let m = RE_DATE.find(identifier)?;
    NaiveDate::parse_from_str(m.as_str(), "%Y%m%d").ok()
}

/// CIK embedded in an EDGAR-style identifier (`...edgar_data_<digits>_...`),
/// zero-padded to the 10-digit join width.
pub fn embedded_cik(identifier: &str) -> Option<String> {
    RE_EDGAR_CIK
        .captures(identifier)
        .map(|c| zero_pad_cik(&c[1]))
}

/// Zero-pad a CIK string to 10 digits, the width used by constituent lists.
pub fn zero_pad_cik(cik: &str) -> String {
    format!("{cik:0>10}")
}
