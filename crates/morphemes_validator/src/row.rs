//! Per-row validation.
//!
//! The validator is a pure function over one raw row and the layout it
//! claims. Checks run in column order and every failed check records a
//! violation; a row is rejected with the full list, never aborted on the
//! first fault. Checks that depend on a parsed segmentation are skipped
//! once segmentation parsing itself has failed.

use morphemes_core::{Column, Entry, FreqCode, RawRow, SchemaVersion, Segmentation, Tier};

use crate::error::RowViolation;

/// The result of validating one raw row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row passed every check and parsed into an entry
    Valid(Entry),
    /// The row failed; all collected violations, in check order
    Invalid(Vec<RowViolation>),
}

impl RowOutcome {
    /// True for an accepted row.
    pub fn is_valid(&self) -> bool {
        matches!(self, RowOutcome::Valid(_))
    }

    /// The parsed entry of an accepted row.
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            RowOutcome::Valid(entry) => Some(entry),
            RowOutcome::Invalid(_) => None,
        }
    }

    /// The violations of a rejected row (empty for accepted rows).
    pub fn violations(&self) -> &[RowViolation] {
        match self {
            RowOutcome::Valid(_) => &[],
            RowOutcome::Invalid(violations) => violations,
        }
    }
}

/// Validates raw rows against a release layout.
///
/// Stateless and deterministic: validating the same row twice yields the
/// same outcome, and rows never depend on each other.
///
/// # Example
///
/// ```rust
/// use morphemes_core::{RawRow, SchemaVersion};
/// use morphemes_validator::RowValidator;
///
/// let validator = RowValidator::new();
/// let row = RawRow::new(1, vec!["роб:R/и:S/ти:F".into(), "1".into()]);
/// let outcome = validator.validate(&row, SchemaVersion::V02);
/// assert_eq!(outcome.entry().unwrap().lemma, "робити");
/// ```
pub struct RowValidator;

impl RowValidator {
    /// Creates a new row validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates a single raw row against a layout.
    pub fn validate(&self, row: &RawRow, version: SchemaVersion) -> RowOutcome {
        // A row of the wrong width cannot be addressed by column at all.
        if row.fields.len() != version.field_count() {
            return RowOutcome::Invalid(vec![RowViolation::schema_mismatch(format!(
                "expected {} fields for {}, found {}",
                version.field_count(),
                version,
                row.fields.len()
            ))]);
        }

        let field = |column: Column| row.field(version, column).unwrap_or("");
        let mut violations = Vec::new();

        let segmentation = match field(Column::MorphTaggedLemma).parse::<Segmentation>() {
            Ok(segmentation) => Some(segmentation),
            Err(err) => {
                let violation = if err.is_unknown_type() {
                    RowViolation::domain(Column::MorphTaggedLemma, err.to_string())
                } else {
                    RowViolation::syntax(Column::MorphTaggedLemma, err.to_string())
                };
                violations.push(violation);
                None
            }
        };

        let tier = match field(Column::Tier).parse::<Tier>() {
            Ok(tier) => Some(tier),
            Err(err) => {
                violations.push(RowViolation::domain(Column::Tier, err.to_string()));
                None
            }
        };

        if let Some(segmentation) = &segmentation {
            // Bare legacy lemmas are exempt from the root requirement.
            if !segmentation.is_unsegmented() && !segmentation.has_root() {
                violations.push(RowViolation::domain(
                    Column::MorphTaggedLemma,
                    "segmentation has no root morpheme",
                ));
            }

            if version.has_column(Column::Lemma) {
                let lemma = field(Column::Lemma);
                let surface = segmentation.surface();
                if surface != lemma {
                    violations.push(RowViolation::consistency(
                        Column::Lemma,
                        format!("morphemes concatenate to '{surface}' but lemma is '{lemma}'"),
                    ));
                }
            }

            if version.has_column(Column::Pattern) {
                let written = field(Column::Pattern);
                let derived = segmentation.pattern();
                if written != derived {
                    violations.push(RowViolation::consistency(
                        Column::Pattern,
                        format!(
                            "pattern column reads '{written}' but the segmentation derives '{derived}'"
                        ),
                    ));
                }
            }
        }

        if version.has_column(Column::ReversedLemma) {
            let lemma = field(Column::Lemma);
            let reversed = field(Column::ReversedLemma);
            let expected: String = lemma.chars().rev().collect();
            if reversed != expected {
                violations.push(RowViolation::consistency(
                    Column::ReversedLemma,
                    format!("'{reversed}' is not '{lemma}' reversed"),
                ));
            }
        }

        let freq = if version.has_column(Column::Freq) {
            match field(Column::Freq).parse::<FreqCode>() {
                Ok(freq) => Some(freq),
                Err(err) => {
                    violations.push(RowViolation::domain(Column::Freq, err.to_string()));
                    None
                }
            }
        } else {
            None
        };

        let (Some(segmentation), Some(tier)) = (segmentation, tier) else {
            return RowOutcome::Invalid(violations);
        };
        if !violations.is_empty() {
            return RowOutcome::Invalid(violations);
        }

        let lemma = if version.has_column(Column::Lemma) {
            field(Column::Lemma).to_string()
        } else {
            segmentation.surface()
        };
        let ambiguous = version.has_column(Column::Ambiguity)
            && !field(Column::Ambiguity).trim().is_empty();

        RowOutcome::Valid(Entry {
            lemma,
            segmentation,
            tier,
            multext: non_empty(field(Column::Multext)),
            pos: non_empty(field(Column::Pos)),
            freq,
            paradigm: non_empty(field(Column::Paradigm)),
            root: non_empty(field(Column::Root)),
            ambiguous,
        })
    }
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViolationKind;
    use pretty_assertions::assert_eq;

    fn row(fields: &[&str]) -> RawRow {
        RawRow::new(1, fields.iter().map(|s| s.to_string()).collect())
    }

    fn v04_ukraina() -> RawRow {
        row(&[
            "Ncfsn",
            "noun",
            "9ea",
            "n10",
            "у:P/кра:R/їн:S/а:F",
            "кра",
            "3",
            "",
            "україна",
            "анїарку",
            "PRSF",
        ])
    }

    #[test]
    fn test_valid_two_column_row() {
        let validator = RowValidator::new();
        let outcome = validator.validate(&row(&["у:P/кра:R/їн:S/а:F", "3"]), SchemaVersion::V02);

        let entry = outcome.entry().expect("row should be valid");
        assert_eq!(entry.lemma, "україна");
        assert_eq!(entry.tier.get(), 3);
        assert_eq!(entry.pattern(), "PRSF");
        assert_eq!(entry.segmentation.len(), 4);
        assert_eq!(entry.multext, None);
    }

    #[test]
    fn test_unknown_type_letter_is_domain_error() {
        let validator = RowValidator::new();
        let outcome = validator.validate(&row(&["у:P/кра:R/їн:Z/а:F", "3"]), SchemaVersion::V02);

        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::DomainError);
        assert_eq!(violations[0].column, Some(Column::MorphTaggedLemma));
        assert_eq!(violations[0].detail, "unknown type letter Z");
    }

    #[test]
    fn test_field_count_mismatch_short_circuits() {
        let validator = RowValidator::new();
        let outcome = validator.validate(
            &row(&["Ncfsn", "noun", "у:P/кра:R/їн:Z/а:F", "кра", "99"]),
            SchemaVersion::V04,
        );

        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::SchemaMismatch);
        assert_eq!(violations[0].column, None);
        assert_eq!(violations[0].detail, "expected 11 fields for v0.4, found 5");
    }

    #[test]
    fn test_malformed_segmentation_is_syntax_error() {
        let validator = RowValidator::new();
        let outcome = validator.validate(&row(&["у:P/кра", "3"]), SchemaVersion::V02);

        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::SyntaxError);
        assert_eq!(violations[0].column, Some(Column::MorphTaggedLemma));
    }

    #[test]
    fn test_valid_v04_row() {
        let validator = RowValidator::new();
        let outcome = validator.validate(&v04_ukraina(), SchemaVersion::V04);

        let entry = outcome.entry().expect("row should be valid");
        assert_eq!(entry.lemma, "україна");
        assert_eq!(entry.multext.as_deref(), Some("Ncfsn"));
        assert_eq!(entry.pos.as_deref(), Some("noun"));
        assert_eq!(entry.freq.as_ref().unwrap().to_string(), "9ea");
        assert_eq!(entry.paradigm.as_deref(), Some("n10"));
        assert_eq!(entry.root.as_deref(), Some("кра"));
        assert!(!entry.ambiguous);
    }

    #[test]
    fn test_concatenation_mismatch() {
        let mut raw = v04_ukraina();
        raw.fields[8] = "країна".to_string();
        raw.fields[9] = "анїарк".to_string();

        let validator = RowValidator::new();
        let outcome = validator.validate(&raw, SchemaVersion::V04);

        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::ConsistencyError);
        assert_eq!(violations[0].column, Some(Column::Lemma));
        assert_eq!(
            violations[0].detail,
            "morphemes concatenate to 'україна' but lemma is 'країна'"
        );
    }

    #[test]
    fn test_pattern_mismatch() {
        let mut raw = v04_ukraina();
        raw.fields[10] = "RRSF".to_string();

        let validator = RowValidator::new();
        let outcome = validator.validate(&raw, SchemaVersion::V04);

        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::ConsistencyError);
        assert_eq!(violations[0].column, Some(Column::Pattern));
    }

    #[test]
    fn test_reversed_lemma_mismatch() {
        let mut raw = v04_ukraina();
        raw.fields[9] = "україна".to_string();

        let validator = RowValidator::new();
        let outcome = validator.validate(&raw, SchemaVersion::V04);

        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].column, Some(Column::ReversedLemma));
    }

    #[test]
    fn test_tier_out_of_range() {
        let validator = RowValidator::new();
        let outcome = validator.validate(&row(&["роб:R/и:S/ти:F", "7"]), SchemaVersion::V02);

        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::DomainError);
        assert_eq!(violations[0].column, Some(Column::Tier));
        assert_eq!(violations[0].detail, "tier 7 is outside the range 1-4");
    }

    #[test]
    fn test_tier_not_an_integer() {
        let validator = RowValidator::new();
        let outcome = validator.validate(&row(&["роб:R/и:S/ти:F", "first"]), SchemaVersion::V02);

        assert_eq!(outcome.violations()[0].column, Some(Column::Tier));
        assert_eq!(outcome.violations()[0].kind, ViolationKind::DomainError);
    }

    #[test]
    fn test_malformed_freq_code() {
        let mut raw = v04_ukraina();
        raw.fields[2] = "9qa".to_string();

        let validator = RowValidator::new();
        let outcome = validator.validate(&raw, SchemaVersion::V04);

        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::DomainError);
        assert_eq!(violations[0].column, Some(Column::Freq));
    }

    #[test]
    fn test_missing_root_morpheme() {
        let validator = RowValidator::new();
        let outcome = validator.validate(&row(&["по:P/над:P", "2"]), SchemaVersion::V02);

        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::DomainError);
        assert_eq!(violations[0].detail, "segmentation has no root morpheme");
    }

    #[test]
    fn test_unsegmented_legacy_row_is_exempt_from_root_check() {
        let validator = RowValidator::new();
        let outcome = validator.validate(&row(&["авжеж", "3"]), SchemaVersion::V02);

        let entry = outcome.entry().expect("bare lemma should be accepted");
        assert!(entry.is_unsegmented());
        assert_eq!(entry.lemma, "авжеж");
        assert_eq!(entry.pattern(), "");
    }

    #[test]
    fn test_unsegmented_row_in_v04_layout() {
        let raw = row(&[
            "", "intj", "2ea", "", "авжеж", "", "3", "", "авжеж", "жежва", "",
        ]);

        let validator = RowValidator::new();
        let outcome = validator.validate(&raw, SchemaVersion::V04);

        let entry = outcome.entry().expect("row should be valid");
        assert!(entry.is_unsegmented());
        assert_eq!(entry.multext, None);
        assert_eq!(entry.pos.as_deref(), Some("intj"));
        assert_eq!(entry.root, None);
    }

    #[test]
    fn test_multiple_violations_collected() {
        let mut raw = v04_ukraina();
        raw.fields[2] = "none".to_string();
        raw.fields[6] = "9".to_string();
        raw.fields[10] = "PRS".to_string();

        let validator = RowValidator::new();
        let outcome = validator.validate(&raw, SchemaVersion::V04);

        let violations = outcome.violations();
        assert_eq!(violations.len(), 3);
        let kinds: Vec<ViolationKind> = violations.iter().map(|v| v.kind).collect();
        assert!(kinds.contains(&ViolationKind::DomainError));
        assert!(kinds.contains(&ViolationKind::ConsistencyError));
    }

    #[test]
    fn test_reversed_check_runs_even_when_segmentation_fails() {
        let mut raw = v04_ukraina();
        raw.fields[4] = "у:P/кра".to_string();
        raw.fields[9] = "україна".to_string();

        let validator = RowValidator::new();
        let outcome = validator.validate(&raw, SchemaVersion::V04);

        let columns: Vec<Option<Column>> =
            outcome.violations().iter().map(|v| v.column).collect();
        assert!(columns.contains(&Some(Column::MorphTaggedLemma)));
        assert!(columns.contains(&Some(Column::ReversedLemma)));
    }

    #[test]
    fn test_ambiguity_flag() {
        let mut raw = v04_ukraina();
        raw.fields[7] = "1".to_string();

        let validator = RowValidator::new();
        let outcome = validator.validate(&raw, SchemaVersion::V04);
        assert!(outcome.entry().expect("row should be valid").ambiguous);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let validator = RowValidator::new();
        let raw = row(&["у:P/кра:R/їн:Z/а:F", "9"]);

        let first = validator.validate(&raw, SchemaVersion::V02);
        let second = validator.validate(&raw, SchemaVersion::V02);
        assert_eq!(first, second);
    }

    #[test]
    fn test_v01_and_v02_share_checks() {
        let validator = RowValidator::new();
        let raw = row(&["пере:P/хід:R", "2"]);

        assert!(validator.validate(&raw, SchemaVersion::V01).is_valid());
        assert!(validator.validate(&raw, SchemaVersion::V02).is_valid());
    }
}
