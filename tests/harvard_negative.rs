// tests/harvard_negative.rs
//
// Harvard-IV negative-word variant of the term pipeline: the engine is
// lexicon-agnostic past the word set, so the inquirer list plugs into the
// same extraction and weighting path as the master dictionary.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use edgar_sentiment_analyzer::batch::{run_term_batch, RawDocument};
use edgar_sentiment_analyzer::lexicon::load_harvard_negative;
use edgar_sentiment_analyzer::weight_documents;

const INQUIRER: &str = "\
Entry,Source,Positiv,Negativ,Ngtv
ABANDON,H4Lvd,,Negativ,Ngtv
ABILITY,H4Lvd,Positiv,,
ABNORMAL,H4Lvd,,Negativ,Ngtv
abuse,H4,,Negativ,Ngtv
ACCOMPANY,H4Lvd,,,
";

#[tokio::test]
async fn harvard_terms_weight_like_master_dictionary_terms() {
    let negative = load_harvard_negative(Cursor::new(INQUIRER)).expect("inquirer parses");
    assert_eq!(negative.len(), 3);
    assert!(negative.contains("ABUSE"));

    let docs = vec![
        Ok(RawDocument {
            identifier: "21_20230301.txt".into(),
            text: "Management chose to abandon the abnormal segment.".into(),
        }),
        Ok(RawDocument {
            identifier: "22_20230302.txt".into(),
            text: "No abuse was found; ability accompanied growth.".into(),
        }),
        Ok(RawDocument {
            identifier: "23_20230303.txt".into(),
            text: "Routine quarter with no flagged language.".into(),
        }),
    ];

    let (records, summary) = run_term_batch(Arc::new(negative), docs, 2).await;
    assert_eq!(summary.processed, 3);
    assert_eq!(summary.skipped, 0);
    // The clean document produces no records at all.
    assert!(records.iter().all(|r| r.identifier != "23_20230303.txt"));

    let weights = weight_documents(&records);
    let by_id: HashMap<&str, f64> = weights
        .iter()
        .map(|w| (w.identifier.as_str(), w.weight))
        .collect();
    assert_eq!(by_id.len(), 2);

    // N = 2 here (only documents that produced records count). Each word is
    // unique to its document, so df = 1 and ln(N/df) = ln 2.
    let ln2 = 2f64.ln();
    let w21 = ((1.0 / (1.0 + 2f64.ln())) * ln2) * 2.0;
    assert!((by_id["21_20230301.txt"] - w21).abs() < 1e-9);
    let w22 = (1.0 / 1.0) * ln2;
    assert!((by_id["22_20230302.txt"] - w22).abs() < 1e-9);
}
