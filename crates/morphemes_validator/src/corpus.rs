//! Corpus loading.
//!
//! Loading is total: every raw row is validated, accepted rows become
//! entries and rejected rows are kept with their violations, so one pass
//! over a release yields both the usable corpus and its quality audit.
//! Rows are independent, so validation is sharded across threads; the
//! input order of rows is preserved in the output.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use morphemes_core::{Entry, RawRow, SchemaVersion};

use crate::error::RowViolation;
use crate::row::{RowOutcome, RowValidator};
use crate::stats::CorpusStats;

/// An ordered collection of accepted entries for one release.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    version: SchemaVersion,
    entries: Vec<Entry>,
}

impl Corpus {
    /// Creates a corpus from already-validated entries.
    pub fn from_entries(version: SchemaVersion, entries: Vec<Entry>) -> Self {
        Self { version, entries }
    }

    /// The release layout the entries were loaded under.
    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    /// The accepted entries, in input order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of accepted entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was accepted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A row the validator rejected, kept verbatim for the audit report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
    /// One-based line number in the source file
    pub line: usize,
    /// The raw column fields as read
    pub fields: Vec<String>,
    /// Every check the row failed, in check order
    pub violations: Vec<RowViolation>,
}

/// The result of loading one release file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    /// The accepted entries
    pub corpus: Corpus,
    /// The rejected rows with their violations
    pub rejected: Vec<RejectedRow>,
    /// Release-level audit warnings (duplicates, provenance questions)
    pub warnings: Vec<String>,
    /// Aggregate statistics over the load
    pub stats: CorpusStats,
}

impl LoadReport {
    /// True when every row was accepted. Warnings do not fail a load.
    pub fn passed(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Loads raw rows into a corpus, collecting rejects and audit warnings.
///
/// # Example
///
/// ```rust
/// use morphemes_core::{RawRow, SchemaVersion};
/// use morphemes_validator::CorpusLoader;
///
/// let rows = vec![
///     RawRow::new(1, vec!["у:P/кра:R/їн:S/а:F".into(), "3".into()]),
///     RawRow::new(2, vec!["роб:R/и:S/ти:F".into(), "99".into()]),
/// ];
///
/// let report = CorpusLoader::new().load(SchemaVersion::V02, rows);
/// assert_eq!(report.corpus.len(), 1);
/// assert_eq!(report.rejected.len(), 1);
/// assert!(!report.passed());
/// ```
pub struct CorpusLoader {
    validator: RowValidator,
}

impl CorpusLoader {
    /// Creates a new corpus loader.
    pub fn new() -> Self {
        Self {
            validator: RowValidator::new(),
        }
    }

    /// Validates every row and partitions the batch into a corpus and its
    /// rejects.
    pub fn load(&self, version: SchemaVersion, rows: Vec<RawRow>) -> LoadReport {
        debug!("validating {} row(s) against {}", rows.len(), version);

        let outcomes: Vec<RowOutcome> = rows
            .par_iter()
            .map(|row| self.validator.validate(row, version))
            .collect();

        let mut entries = Vec::new();
        let mut rejected = Vec::new();
        for (row, outcome) in rows.into_iter().zip(outcomes) {
            match outcome {
                RowOutcome::Valid(entry) => entries.push(entry),
                RowOutcome::Invalid(violations) => rejected.push(RejectedRow {
                    line: row.line,
                    fields: row.fields,
                    violations,
                }),
            }
        }

        let corpus = Corpus::from_entries(version, entries);
        let warnings = audit_warnings(&corpus);
        let stats = CorpusStats::compute(&corpus, rejected.len());

        info!(
            "loaded {}: {} accepted, {} rejected, {} warning(s)",
            version,
            corpus.len(),
            rejected.len(),
            warnings.len()
        );

        LoadReport {
            corpus,
            rejected,
            warnings,
            stats,
        }
    }
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Release-level checks that concern the corpus as a whole rather than any
/// single row.
fn audit_warnings(corpus: &Corpus) -> Vec<String> {
    let mut warnings = Vec::new();

    // Consumers key the dataset by lemma, but the source never enforced
    // uniqueness.
    let mut counts: std::collections::BTreeMap<&str, usize> = std::collections::BTreeMap::new();
    for entry in corpus.entries() {
        *counts.entry(entry.lemma.as_str()).or_insert(0) += 1;
    }
    for (lemma, count) in counts {
        if count > 1 {
            warnings.push(format!("lemma '{lemma}' appears {count} times"));
        }
    }

    // The source documentation describes tier 3 both as unsegmented and as
    // classifier-tagged; a release containing both shapes inherits the
    // question.
    let bare = corpus
        .entries()
        .iter()
        .filter(|e| e.tier.get() == 3 && e.is_unsegmented())
        .count();
    let tagged = corpus
        .entries()
        .iter()
        .filter(|e| e.tier.get() == 3 && !e.is_unsegmented())
        .count();
    if bare > 0 && tagged > 0 {
        warnings.push(format!(
            "tier 3 mixes {bare} unsegmented and {tagged} segmented entries; provenance should be reviewed"
        ));
    }

    warnings
}
