//! Aggregate statistics over a loaded corpus.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;

/// Counts computed over one load.
///
/// Part-of-speech labels are counted verbatim, so a dual tag recorded as
/// `adj;noun` counts as its own label rather than as one of each; the
/// disagreement between the two taggers is data worth keeping visible.
/// Ordered maps keep report output stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Rows seen, accepted plus rejected
    pub total_rows: usize,
    /// Rows that passed every check
    pub accepted: usize,
    /// Rows rejected with violations
    pub rejected: usize,
    /// Accepted entries per tier
    pub per_tier: BTreeMap<u8, usize>,
    /// Accepted entries per verbatim part-of-speech label
    pub per_pos: BTreeMap<String, usize>,
    /// Accepted entries carrying a bare, unsegmented lemma
    pub unsegmented: usize,
    /// Accepted entries flagged as homonyms
    pub ambiguous: usize,
    /// Lemmas that occur more than once among accepted entries
    pub duplicate_lemmas: usize,
}

impl CorpusStats {
    /// Computes statistics for a corpus and its reject count.
    pub fn compute(corpus: &Corpus, rejected: usize) -> Self {
        let mut stats = CorpusStats {
            total_rows: corpus.len() + rejected,
            accepted: corpus.len(),
            rejected,
            ..Default::default()
        };

        let mut lemma_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for entry in corpus.entries() {
            *stats.per_tier.entry(entry.tier.get()).or_insert(0) += 1;
            if let Some(pos) = &entry.pos {
                *stats.per_pos.entry(pos.clone()).or_insert(0) += 1;
            }
            if entry.is_unsegmented() {
                stats.unsegmented += 1;
            }
            if entry.ambiguous {
                stats.ambiguous += 1;
            }
            *lemma_counts.entry(entry.lemma.as_str()).or_insert(0) += 1;
        }
        stats.duplicate_lemmas = lemma_counts.values().filter(|&&c| c > 1).count();

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphemes_core::{EntryBuilder, SchemaVersion, Tier};
    use pretty_assertions::assert_eq;

    fn tier(n: u8) -> Tier {
        Tier::new(n).unwrap()
    }

    #[test]
    fn test_compute_counts() {
        let entries = vec![
            EntryBuilder::new("робити", tier(1))
                .segmentation("роб:R/и:S/ти:F".parse().unwrap())
                .pos("verb")
                .build(),
            EntryBuilder::new("писати", tier(1))
                .segmentation("пис:R/а:S/ти:F".parse().unwrap())
                .pos("verb")
                .build(),
            EntryBuilder::new("україна", tier(3))
                .segmentation("у:P/кра:R/їн:S/а:F".parse().unwrap())
                .pos("noun")
                .ambiguous(true)
                .build(),
            EntryBuilder::new("авжеж", tier(3)).pos("intj").build(),
            EntryBuilder::new("робити", tier(2))
                .segmentation("роб:R/и:S/ти:F".parse().unwrap())
                .pos("verb;noun")
                .build(),
        ];
        let corpus = Corpus::from_entries(SchemaVersion::V04, entries);

        let stats = CorpusStats::compute(&corpus, 2);
        assert_eq!(stats.total_rows, 7);
        assert_eq!(stats.accepted, 5);
        assert_eq!(stats.rejected, 2);
        assert_eq!(stats.per_tier.get(&1), Some(&2));
        assert_eq!(stats.per_tier.get(&2), Some(&1));
        assert_eq!(stats.per_tier.get(&3), Some(&2));
        assert_eq!(stats.per_tier.get(&4), None);
        assert_eq!(stats.per_pos.get("verb"), Some(&2));
        assert_eq!(stats.per_pos.get("verb;noun"), Some(&1));
        assert_eq!(stats.per_pos.get("noun"), Some(&1));
        assert_eq!(stats.unsegmented, 1);
        assert_eq!(stats.ambiguous, 1);
        assert_eq!(stats.duplicate_lemmas, 1);
    }

    #[test]
    fn test_entries_without_pos_are_not_counted_per_pos() {
        let entries = vec![
            EntryBuilder::new("перехід", tier(2))
                .segmentation("пере:P/хід:R".parse().unwrap())
                .build(),
        ];
        let corpus = Corpus::from_entries(SchemaVersion::V02, entries);

        let stats = CorpusStats::compute(&corpus, 0);
        assert!(stats.per_pos.is_empty());
        assert_eq!(stats.per_tier.get(&2), Some(&1));
    }

    #[test]
    fn test_json_tier_keys_are_stable() {
        let entries = vec![
            EntryBuilder::new("білий", tier(4))
                .segmentation("біл:R/ий:F".parse().unwrap())
                .build(),
            EntryBuilder::new("перехід", tier(1))
                .segmentation("пере:P/хід:R".parse().unwrap())
                .build(),
        ];
        let corpus = Corpus::from_entries(SchemaVersion::V03, entries);

        let json = serde_json::to_string(&CorpusStats::compute(&corpus, 0)).unwrap();
        let tiers = json.find("\"per_tier\":{\"1\":1,\"4\":1}");
        assert!(tiers.is_some(), "unexpected stats JSON: {json}");
    }
}
