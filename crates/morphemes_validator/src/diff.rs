//! Cross-release comparison.
//!
//! Releases are append-only: every lemma of version N must still exist in
//! version N+1, and its segmentation may only stay identical or gain
//! boundaries. Anything else is drift worth flagging before a release
//! ships, whether a boundary moved, a same-extent morpheme changed type or
//! a lemma vanished outright.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use morphemes_core::{Entry, MorphType, SchemaVersion, Segmentation};

use crate::corpus::Corpus;

/// One lemma whose segmentation contradicts the earlier release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationDrift {
    /// The lemma concerned
    pub lemma: String,
    /// Its segmentation in the earlier release
    pub old: String,
    /// Its segmentation in the later release
    pub new: String,
    /// What contradicts what
    pub detail: String,
}

/// The result of comparing two releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Layout of the earlier release
    pub old_version: SchemaVersion,
    /// Layout of the later release
    pub new_version: SchemaVersion,
    /// Lemmas of the earlier release missing from the later one
    pub missing: Vec<String>,
    /// Lemmas whose segmentation contradicts the earlier release
    pub contradicted: Vec<SegmentationDrift>,
    /// Lemmas carried over byte-for-byte
    pub identical: usize,
    /// Lemmas whose segmentation gained boundaries without contradiction
    pub refined: usize,
    /// Lemmas new to the later release
    pub added: usize,
}

impl DiffReport {
    /// True when the later release extends the earlier one without loss or
    /// contradiction.
    pub fn passed(&self) -> bool {
        self.missing.is_empty() && self.contradicted.is_empty()
    }
}

enum Relation {
    Identical,
    Refined,
    Contradiction(String),
}

/// Compares two loaded releases, oldest first.
///
/// When a lemma occurs more than once in the later release, its first
/// occurrence is the one compared; duplicate lemmas are a load-time audit
/// warning, not a diff concern.
///
/// # Example
///
/// ```rust
/// use morphemes_core::{EntryBuilder, SchemaVersion, Tier};
/// use morphemes_validator::{Corpus, compare_releases};
///
/// let verb = |seg: &str| {
///     EntryBuilder::new("робити", Tier::new(1).unwrap())
///         .segmentation(seg.parse().unwrap())
///         .build()
/// };
/// let old = Corpus::from_entries(SchemaVersion::V03, vec![verb("роб:R/ити:F")]);
/// let new = Corpus::from_entries(SchemaVersion::V04, vec![verb("роб:R/и:S/ти:F")]);
///
/// let report = compare_releases(&old, &new);
/// assert!(report.passed());
/// assert_eq!(report.refined, 1);
/// ```
pub fn compare_releases(old: &Corpus, new: &Corpus) -> DiffReport {
    let mut new_by_lemma: HashMap<&str, &Entry> = HashMap::new();
    for entry in new.entries() {
        new_by_lemma.entry(entry.lemma.as_str()).or_insert(entry);
    }

    let mut missing = Vec::new();
    let mut contradicted = Vec::new();
    let mut identical = 0;
    let mut refined = 0;

    for old_entry in old.entries() {
        match new_by_lemma.get(old_entry.lemma.as_str()) {
            None => missing.push(old_entry.lemma.clone()),
            Some(new_entry) => {
                match relation(&old_entry.segmentation, &new_entry.segmentation) {
                    Relation::Identical => identical += 1,
                    Relation::Refined => refined += 1,
                    Relation::Contradiction(detail) => contradicted.push(SegmentationDrift {
                        lemma: old_entry.lemma.clone(),
                        old: old_entry.segmentation.to_string(),
                        new: new_entry.segmentation.to_string(),
                        detail,
                    }),
                }
            }
        }
    }

    let old_lemmas: HashSet<&str> = old.entries().iter().map(|e| e.lemma.as_str()).collect();
    let added = new_by_lemma
        .keys()
        .filter(|lemma| !old_lemmas.contains(*lemma))
        .count();

    DiffReport {
        old_version: old.version(),
        new_version: new.version(),
        missing,
        contradicted,
        identical,
        refined,
        added,
    }
}

/// Character spans of a segmentation's morphemes, as (start, end, type).
fn spans(segmentation: &Segmentation) -> Vec<(usize, usize, MorphType)> {
    let mut out = Vec::new();
    let mut offset = 0;
    for morpheme in segmentation.morphemes() {
        let len = morpheme.surface.chars().count();
        out.push((offset, offset + len, morpheme.morph_type));
        offset += len;
    }
    out
}

fn relation(old: &Segmentation, new: &Segmentation) -> Relation {
    if old == new {
        return Relation::Identical;
    }

    let old_surface = old.surface();
    let new_surface = new.surface();
    if old_surface != new_surface {
        return Relation::Contradiction(format!(
            "surface changed from '{old_surface}' to '{new_surface}'"
        ));
    }

    match (old.is_unsegmented(), new.is_unsegmented()) {
        // A bare lemma gaining its first segmentation is the expected kind
        // of progress.
        (true, false) => Relation::Refined,
        (false, true) => Relation::Contradiction("segmentation was removed".to_string()),
        (true, true) => Relation::Identical,
        (false, false) => {
            let old_spans = spans(old);
            let new_spans = spans(new);

            let new_starts: HashSet<usize> = new_spans.iter().map(|&(start, _, _)| start).collect();
            for &(start, _, _) in &old_spans {
                if !new_starts.contains(&start) {
                    return Relation::Contradiction(format!(
                        "the boundary at character {start} was removed"
                    ));
                }
            }

            // A morpheme that kept its exact extent must keep its type; a
            // split morpheme constrains nothing about its pieces.
            let new_by_span: HashMap<(usize, usize), MorphType> = new_spans
                .iter()
                .map(|&(start, end, morph_type)| ((start, end), morph_type))
                .collect();
            for &(start, end, morph_type) in &old_spans {
                if let Some(&new_type) = new_by_span.get(&(start, end)) {
                    if new_type != morph_type {
                        return Relation::Contradiction(format!(
                            "the morpheme at characters {start}-{end} changed type from {morph_type} to {new_type}"
                        ));
                    }
                }
            }

            Relation::Refined
        }
    }
}
