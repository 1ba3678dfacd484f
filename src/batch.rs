// src/batch.rs
//! # Batch Driver
//! Embarrassingly-parallel fan-out of per-document work over a bounded
//! worker pool. Each document is scored independently with read-only access
//! to the shared lexicon; results are collected over a channel in arrival
//! order (no ordering guarantee — consumers re-key by identifier). A failed
//! document is logged and counted, never fatal to the batch.

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::lexicon::Lexicon;
use crate::score::{score_document, DocumentStatistics};
use crate::terms::{extract_term_records, TermRecord};

/// One raw input document: identifier plus already-decoded text. Undecodable
/// bytes are the source's concern (lossy decode or a per-document error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub identifier: String,
    pub text: String,
}

/// External file source providing the batch. Per-document read failures are
/// carried as `Err` entries so that one bad file never aborts the batch.
#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch_documents(&self) -> anyhow::Result<Vec<Result<RawDocument, EngineError>>>;
    fn name(&self) -> &'static str;
}

/// User-visible accounting for a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
}

/// Score every readable document in the batch against the lexicon.
pub async fn run_score_batch(
    lexicon: Arc<Lexicon>,
    documents: Vec<Result<RawDocument, EngineError>>,
    config: &EngineConfig,
) -> (Vec<DocumentStatistics>, BatchSummary) {
    let semaphore = Arc::new(Semaphore::new(config.concurrency.max(1)));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let config = Arc::new(config.clone());
    let mut skipped = 0usize;

    for doc in documents {
        let doc = match doc {
            Ok(d) => d,
            Err(e) => {
                skipped += 1;
                warn!(error = %e, "skipping unreadable document");
                continue;
            }
        };
        let tx = tx.clone();
        let sem = Arc::clone(&semaphore);
        let lexicon = Arc::clone(&lexicon);
        let config = Arc::clone(&config);
        tokio::spawn(async move {
            let _permit = sem.acquire_owned().await.expect("semaphore closed");
            let out = tokio::task::spawn_blocking(move || {
                score_document(&doc.identifier, &doc.text, &lexicon, &config)
            })
            .await;
            let _ = tx.send(out);
        });
    }
    drop(tx);

    let mut stats = Vec::new();
    while let Some(res) = rx.recv().await {
        match res {
            Ok(s) => stats.push(s),
            Err(e) => {
                skipped += 1;
                warn!(error = %e, "scoring worker failed");
            }
        }
    }

    let summary = BatchSummary {
        processed: stats.len(),
        skipped,
    };
    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        "score batch finished"
    );
    (stats, summary)
}

/// Extract term records for every readable document against a word set.
pub async fn run_term_batch(
    words: Arc<HashSet<String>>,
    documents: Vec<Result<RawDocument, EngineError>>,
    concurrency: usize,
) -> (Vec<TermRecord>, BatchSummary) {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut skipped = 0usize;

    for doc in documents {
        let doc = match doc {
            Ok(d) => d,
            Err(e) => {
                skipped += 1;
                warn!(error = %e, "skipping unreadable document");
                continue;
            }
        };
        let tx = tx.clone();
        let sem = Arc::clone(&semaphore);
        let words = Arc::clone(&words);
        tokio::spawn(async move {
            let _permit = sem.acquire_owned().await.expect("semaphore closed");
            let out = tokio::task::spawn_blocking(move || {
                extract_term_records(&doc.identifier, &doc.text, &words)
            })
            .await;
            let _ = tx.send(out);
        });
    }
    drop(tx);

    let mut records = Vec::new();
    let mut processed = 0usize;
    while let Some(res) = rx.recv().await {
        match res {
            Ok(mut recs) => {
                processed += 1;
                records.append(&mut recs);
            }
            Err(e) => {
                skipped += 1;
                warn!(error = %e, "term extraction worker failed");
            }
        }
    }

    let summary = BatchSummary { processed, skipped };
    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        records = records.len(),
        "term batch finished"
    );
    (records, summary)
}

/// Convenience wrapper: fetch from a source, then score.
pub async fn score_from_source(
    source: &dyn DocumentSource,
    lexicon: Arc<Lexicon>,
    config: &EngineConfig,
) -> anyhow::Result<(Vec<DocumentStatistics>, BatchSummary)> {
    let documents = source.fetch_documents().await?;
    Ok(run_score_batch(lexicon, documents, config).await)
}

/// Convenience wrapper: fetch from a source, then extract term records.
pub async fn terms_from_source(
    source: &dyn DocumentSource,
    words: Arc<HashSet<String>>,
    concurrency: usize,
) -> anyhow::Result<(Vec<TermRecord>, BatchSummary)> {
    let documents = source.fetch_documents().await?;
    Ok(run_term_batch(words, documents, concurrency).await)
}
