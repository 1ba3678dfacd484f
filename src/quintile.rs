// src/quintile.rs
//! # Quintile Ranker
//! Equal-population binning of documents by corpus weight, with a median
//! aggregate of an externally supplied outcome value (e.g. post-filing
//! excess return) per bucket.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{EngineError, Result};
use crate::weight::CorpusWeight;

/// One of five buckets, ordered 1..=5 by ascending weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuintileBucket {
    /// 1 = lowest weights, 5 = highest.
    pub index: u8,
    /// Documents assigned to this bucket, in ranking order.
    pub identifiers: Vec<String>,
    /// Median of the outcome values of the assigned documents.
    pub median_outcome: f64,
}

/// Bin `(document, weight)` pairs into five equal-population quintiles and
/// aggregate the outcome per bucket.
///
/// Documents without an outcome are dropped before binning (inner-join
/// semantics). Ordering is deterministic: ascending weight, ties broken by
/// identifier. Fewer than five distinct weight values is an error — the
/// statistic would be degenerate.
pub fn rank_quintiles(
    weights: &[CorpusWeight],
    outcomes: &HashMap<String, f64>,
) -> Result<Vec<QuintileBucket>> {
    let mut joined: Vec<(&CorpusWeight, f64)> = weights
        .iter()
        .filter_map(|w| outcomes.get(&w.identifier).map(|o| (w, *o)))
        .collect();

    let mut distinct: Vec<f64> = joined.iter().map(|(w, _)| w.weight).collect();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup_by(|a, b| a.total_cmp(b).is_eq());
    if distinct.len() < 5 {
        return Err(EngineError::InsufficientData {
            distinct: distinct.len(),
        });
    }

    joined.sort_by(|(a, _), (b, _)| {
        f64::total_cmp(&a.weight, &b.weight).then_with(|| a.identifier.cmp(&b.identifier))
    });

    let n = joined.len();
    let mut buckets = Vec::with_capacity(5);
    for k in 0..5usize {
        let start = k * n / 5;
        let end = (k + 1) * n / 5;
        let slice = &joined[start..end];
        buckets.push(QuintileBucket {
            index: (k + 1) as u8,
            identifiers: slice.iter().map(|(w, _)| w.identifier.clone()).collect(),
            median_outcome: median(slice.iter().map(|(_, o)| *o)),
        });
    }
    Ok(buckets)
}

fn median(values: impl Iterator<Item = f64>) -> f64 {
    let mut v: Vec<f64> = values.collect();
    v.sort_by(f64::total_cmp);
    let n = v.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        v[n / 2]
    } else {
        (v[n / 2 - 1] + v[n / 2]) / 2.0
    }
}
