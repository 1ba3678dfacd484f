// tests/score_batch.rs
//
// Batch scoring through the DocumentSource seam: full per-document
// statistics over a small synthetic corpus, with one unreadable document
// that must be skipped and counted.

use std::io::Cursor;
use std::sync::Arc;

use edgar_sentiment_analyzer::batch::{score_from_source, DocumentSource, RawDocument};
use edgar_sentiment_analyzer::{EngineConfig, EngineError, Lexicon};

const HEADER: &str = "Word,Seq_num,Word Count,Word Proportion,Average Proportion,Std Dev,Doc Count,Negative,Positive,Uncertainty,Litigious,Constraining,Superfluous,Interesting,Complexity,Modal,Irregular Verb,Harvard_IV,Syllables,Source";

fn test_lexicon() -> Lexicon {
    let rows = [
        // word, neg, pos, modal, syllables
        ("loss", 2009, 0, 0, 1),
        ("gain", 0, 2009, 0, 1),
        ("may", 0, 0, 3, 1),
        ("shall", 0, 0, 1, 1),
        ("revenue", 0, 0, 0, 3),
    ];
    let mut src = String::from(HEADER);
    for (w, neg, pos, modal, syl) in rows {
        src.push_str(&format!(
            "\n{w},1,100,0.001,0.001,0.0005,10,{neg},{pos},0,0,0,0,0,0,{modal},0,0,{syl},12of12inf"
        ));
    }
    Lexicon::load_from_reader(Cursor::new(src)).expect("lexicon")
}

struct FixtureSource {
    docs: Vec<(String, Option<String>)>,
}

#[async_trait::async_trait]
impl DocumentSource for FixtureSource {
    async fn fetch_documents(&self) -> anyhow::Result<Vec<Result<RawDocument, EngineError>>> {
        Ok(self
            .docs
            .iter()
            .map(|(id, text)| match text {
                Some(t) => Ok(RawDocument {
                    identifier: id.clone(),
                    text: t.clone(),
                }),
                None => Err(EngineError::DocumentRead {
                    identifier: id.clone(),
                    reason: "unreadable".into(),
                }),
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

#[tokio::test]
async fn scores_batch_and_skips_unreadable() {
    let source = FixtureSource {
        docs: vec![
            (
                "11_20240101.txt".to_string(),
                Some("Revenue gain of $1,250.75 was offset by a loss. The firm may expand.".to_string()),
            ),
            ("12_20240102.txt".to_string(), None),
            (
                "13_20240103.txt".to_string(),
                Some("1234 9876".to_string()),
            ),
        ],
    };

    let lexicon = Arc::new(test_lexicon());
    let config = EngineConfig::default();
    let (stats, summary) = score_from_source(&source, lexicon, &config)
        .await
        .expect("fixture source never fails wholesale");

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.skipped, 1);

    let doc = stats
        .iter()
        .find(|s| s.identifier == "11_20240101.txt")
        .expect("scored");
    // REVENUE, GAIN, LOSS match; the month-colliding MAY is redacted.
    assert_eq!(doc.word_count, 3);
    assert!((doc.pct_negative - 100.0 / 3.0).abs() < 1e-9);
    assert!((doc.pct_positive - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(doc.pct_weak_modal, 0.0);
    // "$1,250.75" collapses into a single standalone number.
    assert_eq!(doc.numbers, 1);
    assert_eq!(doc.entity_id, "11");
    assert_eq!(doc.vocabulary, 3);
    assert!((doc.avg_syllables - 5.0 / 3.0).abs() < 1e-9);

    let empty = stats
        .iter()
        .find(|s| s.identifier == "13_20240103.txt")
        .expect("scored");
    assert_eq!(empty.word_count, 0);
    assert_eq!(empty.pct_negative, 0.0);
    assert_eq!(empty.avg_word_length, 0.0);
    assert_eq!(empty.numbers, 2);
    assert_eq!(empty.digit_chars, 8);
}
