// src/lexicon.rs
//! # Master Dictionary
//! Loader and lookup structure for the Loughran-McDonald master dictionary,
//! plus the Harvard-IV negative-word list.
//!
//! The lexicon is built once at startup and shared read-only by all scoring
//! workers (`Arc<Lexicon>`); lookups are a single `HashMap` probe since the
//! map is queried once per token across potentially millions of tokens.
//! Malformed source rows are skipped with a diagnostic, never fatal.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

use crate::error::{EngineError, Result};

/// Expected column count of a master-dictionary row.
pub const MASTER_DICTIONARY_FIELDS: usize = 20;

/// Pronouns, articles, auxiliaries etc. flagged on each entry so downstream
/// consumers can filter them without carrying their own list.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ME", "MY", "MYSELF", "WE", "OUR", "OURS", "OURSELVES", "YOU", "YOUR", "YOURS",
        "YOURSELF", "YOURSELVES", "HE", "HIM", "HIS", "HIMSELF", "SHE", "HER", "HERS", "HERSELF",
        "IT", "ITS", "ITSELF", "THEY", "THEM", "THEIR", "THEIRS", "THEMSELVES", "WHAT", "WHICH",
        "WHO", "WHOM", "THIS", "THAT", "THESE", "THOSE", "AM", "IS", "ARE", "WAS", "WERE", "BE",
        "BEEN", "BEING", "HAVE", "HAS", "HAD", "HAVING", "DO", "DOES", "DID", "DOING", "AN",
        "THE", "AND", "BUT", "IF", "OR", "BECAUSE", "AS", "UNTIL", "WHILE", "OF", "AT", "BY",
        "FOR", "WITH", "ABOUT", "BETWEEN", "INTO", "THROUGH", "DURING", "BEFORE",
        "AFTER", "ABOVE", "BELOW", "TO", "FROM", "UP", "DOWN", "IN", "OUT", "ON", "OFF", "OVER",
        "UNDER", "AGAIN", "FURTHER", "THEN", "ONCE", "HERE", "THERE", "WHEN", "WHERE", "WHY",
        "HOW", "ALL", "ANY", "BOTH", "EACH", "FEW", "MORE", "MOST", "OTHER", "SOME", "SUCH",
        "NO", "NOR", "NOT", "ONLY", "OWN", "SAME", "SO", "THAN", "TOO", "VERY", "CAN",
        "JUST", "SHOULD", "NOW",
    ]
    .into_iter()
    .collect()
});

/// Sentiment/linguistic categories reported in the per-document statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Negative,
    Positive,
    Uncertainty,
    Litigious,
    Constraining,
    StrongModal,
    WeakModal,
    Complexity,
}

impl Category {
    /// All eight reported categories, in the output-record order.
    pub const ALL: [Category; 8] = [
        Category::Negative,
        Category::Positive,
        Category::Uncertainty,
        Category::Litigious,
        Category::StrongModal,
        Category::WeakModal,
        Category::Constraining,
        Category::Complexity,
    ];
}

/// Modal classification from the source's 0/1/2/3 code.
///
/// Moderate is tracked but intentionally never reported in the statistics
/// vector; only strong and weak surface as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    Strong,
    Moderate,
    Weak,
}

/// One master-dictionary entry, keyed by its uppercase word.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    pub sequence_number: u64,
    pub word_count: u64,
    pub word_proportion: f64,
    pub average_proportion: f64,
    pub std_dev_proportion: f64,
    pub doc_count: u64,
    pub negative: bool,
    pub positive: bool,
    pub uncertainty: bool,
    pub litigious: bool,
    pub constraining: bool,
    pub superfluous: bool,
    pub interesting: bool,
    pub complexity: bool,
    pub modal: Modal,
    pub irregular_verb: bool,
    pub harvard_iv: bool,
    pub syllables: u32,
    pub source: String,
    pub stopword: bool,
}

impl LexiconEntry {
    pub fn strong_modal(&self) -> bool {
        self.modal == Modal::Strong
    }

    pub fn moderate_modal(&self) -> bool {
        self.modal == Modal::Moderate
    }

    pub fn weak_modal(&self) -> bool {
        self.modal == Modal::Weak
    }

    /// Membership test for one reported category.
    pub fn in_category(&self, category: Category) -> bool {
        match category {
            Category::Negative => self.negative,
            Category::Positive => self.positive,
            Category::Uncertainty => self.uncertainty,
            Category::Litigious => self.litigious,
            Category::Constraining => self.constraining,
            Category::StrongModal => self.strong_modal(),
            Category::WeakModal => self.weak_modal(),
            Category::Complexity => self.complexity,
        }
    }
}

/// Immutable word → entry map. Build once, share via `Arc`.
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
    skipped_records: usize,
}

impl Lexicon {
    /// Load the master dictionary from a CSV file on disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use anyhow::Context;
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("opening master dictionary at {}", path.display()))?;
        let lexicon = Self::load_from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            words = lexicon.len(),
            skipped = lexicon.skipped_records,
            "master dictionary loaded"
        );
        Ok(lexicon)
    }

    /// Load the master dictionary from any buffered reader.
    ///
    /// The first line is treated as the header. Rows with a wrong field count
    /// or an unparsable field are skipped with a warning and counted in
    /// [`Lexicon::skipped_records`]; only I/O failures abort the load.
    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut entries = HashMap::new();
        let mut skipped = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if idx == 0 {
                continue; // header
            }
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            match parse_record(idx + 1, line) {
                Ok((word, entry)) => {
                    entries.insert(word, entry);
                }
                Err(e) => {
                    skipped += 1;
                    warn!(error = %e, "skipping master dictionary row");
                }
            }
        }

        Ok(Self {
            entries,
            skipped_records: skipped,
        })
    }

    /// Entry for an already-uppercased word.
    pub fn lookup(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows dropped during loading (wrong field count or bad field).
    pub fn skipped_records(&self) -> usize {
        self.skipped_records
    }

    /// The full uppercase key set, for term extraction against the whole
    /// dictionary.
    pub fn words(&self) -> HashSet<String> {
        self.entries.keys().cloned().collect()
    }

    /// The word set of one category, e.g. all negative words. Used to drive
    /// category-filtered term extraction.
    pub fn category_words(&self, category: Category) -> HashSet<String> {
        self.entries
            .iter()
            .filter(|(_, e)| e.in_category(category))
            .map(|(w, _)| w.clone())
            .collect()
    }
}

fn parse_record(line: usize, raw: &str) -> Result<(String, LexiconEntry)> {
    let cols: Vec<&str> = raw.split(',').map(str::trim).collect();
    if cols.len() != MASTER_DICTIONARY_FIELDS {
        return Err(EngineError::MalformedLexiconRecord {
            line,
            reason: format!(
                "expected {} fields, got {}",
                MASTER_DICTIONARY_FIELDS,
                cols.len()
            ),
        });
    }

    let word = cols[0].to_uppercase();
    if word.is_empty() {
        return Err(EngineError::MalformedLexiconRecord {
            line,
            reason: "empty word".into(),
        });
    }

    let field_err = |name: &str, value: &str| EngineError::MalformedLexiconRecord {
        line,
        reason: format!("bad {name}: '{value}'"),
    };
    let int = |name: &str, v: &str| v.parse::<u64>().map_err(|_| field_err(name, v));
    let float = |name: &str, v: &str| v.parse::<f64>().map_err(|_| field_err(name, v));
    // Flags in the source are year stamps or 0; anything nonzero is set.
    let flag = |name: &str, v: &str| {
        v.parse::<i64>()
            .map(|n| n != 0)
            .map_err(|_| field_err(name, v))
    };

    let modal = match int("modal code", cols[15])? {
        0 => Modal::None,
        1 => Modal::Strong,
        2 => Modal::Moderate,
        3 => Modal::Weak,
        n => {
            return Err(EngineError::MalformedLexiconRecord {
                line,
                reason: format!("modal code out of range: {n}"),
            })
        }
    };

    let entry = LexiconEntry {
        sequence_number: int("sequence number", cols[1])?,
        word_count: int("word count", cols[2])?,
        word_proportion: float("word proportion", cols[3])?,
        average_proportion: float("average proportion", cols[4])?,
        std_dev_proportion: float("std dev proportion", cols[5])?,
        doc_count: int("doc count", cols[6])?,
        negative: flag("negative", cols[7])?,
        positive: flag("positive", cols[8])?,
        uncertainty: flag("uncertainty", cols[9])?,
        litigious: flag("litigious", cols[10])?,
        constraining: flag("constraining", cols[11])?,
        superfluous: flag("superfluous", cols[12])?,
        interesting: flag("interesting", cols[13])?,
        complexity: flag("complexity", cols[14])?,
        modal,
        irregular_verb: flag("irregular verb", cols[16])?,
        harvard_iv: flag("harvard iv", cols[17])?,
        syllables: int("syllables", cols[18])? as u32,
        source: cols[19].to_string(),
        stopword: STOPWORDS.contains(word.as_str()),
    };

    Ok((word, entry))
}

/// Load the Harvard-IV inquirer word list and return the uppercase set of
/// words tagged negative. Columns are located by header name (`Entry`,
/// `Negativ`); a row is negative when its `Negativ` cell is non-empty.
pub fn load_harvard_negative<R: BufRead>(reader: R) -> Result<HashSet<String>> {
    let mut lines = reader.lines();
    let header = match lines.next() {
        Some(h) => h?,
        None => return Err(EngineError::MissingColumn("Entry".into())),
    };
    let cols: Vec<String> = header
        .trim_end_matches('\r')
        .split(',')
        .map(|c| c.trim().to_string())
        .collect();
    let entry_idx = cols
        .iter()
        .position(|c| c.eq_ignore_ascii_case("Entry"))
        .ok_or_else(|| EngineError::MissingColumn("Entry".into()))?;
    let negativ_idx = cols
        .iter()
        .position(|c| c.eq_ignore_ascii_case("Negativ"))
        .ok_or_else(|| EngineError::MissingColumn("Negativ".into()))?;

    let mut words = HashSet::new();
    for line in lines {
        let line = line?;
        let row: Vec<&str> = line.trim_end_matches('\r').split(',').collect();
        let entry = row.get(entry_idx).map(|s| s.trim()).unwrap_or_default();
        let negativ = row.get(negativ_idx).map(|s| s.trim()).unwrap_or_default();
        if !entry.is_empty() && !negativ.is_empty() {
            words.insert(entry.to_uppercase());
        }
    }
    Ok(words)
}

/// Path convenience wrapper for [`load_harvard_negative`].
pub fn load_harvard_negative_from_path(path: impl AsRef<Path>) -> anyhow::Result<HashSet<String>> {
    use anyhow::Context;
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("opening Harvard-IV dictionary at {}", path.display()))?;
    let words = load_harvard_negative(BufReader::new(file))?;
    info!(path = %path.display(), words = words.len(), "Harvard-IV negative list loaded");
    Ok(words)
}
