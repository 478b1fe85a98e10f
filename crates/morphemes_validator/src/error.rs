//! Violation types for row validation.
//!
//! A rejected row carries one violation per failed check. Violations never
//! abort loading; they are collected and reported so a whole release can be
//! audited in one pass.

use std::fmt;

use serde::{Deserialize, Serialize};

use morphemes_core::Column;

/// The four kinds of row violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// The row does not fit the declared column layout at all
    SchemaMismatch,
    /// A field is structurally malformed (bad segmentation syntax, missing
    /// type tag)
    SyntaxError,
    /// Two fields of the row contradict each other (lemma vs. concatenation,
    /// pattern vs. types)
    ConsistencyError,
    /// A value falls outside a closed vocabulary or range (unknown type
    /// letter, tier out of range)
    DomainError,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ViolationKind::SchemaMismatch => "schema mismatch",
            ViolationKind::SyntaxError => "syntax error",
            ViolationKind::ConsistencyError => "consistency error",
            ViolationKind::DomainError => "domain error",
        };
        f.write_str(label)
    }
}

/// One failed check on one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowViolation {
    /// What kind of check failed
    pub kind: ViolationKind,
    /// The column the check concerns; `None` when the whole row is at fault
    pub column: Option<Column>,
    /// Human-readable detail
    pub detail: String,
}

impl RowViolation {
    /// Creates a schema mismatch violation (whole-row fault).
    pub fn schema_mismatch(detail: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::SchemaMismatch,
            column: None,
            detail: detail.into(),
        }
    }

    /// Creates a syntax violation for a column.
    pub fn syntax(column: Column, detail: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::SyntaxError,
            column: Some(column),
            detail: detail.into(),
        }
    }

    /// Creates a consistency violation for a column.
    pub fn consistency(column: Column, detail: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::ConsistencyError,
            column: Some(column),
            detail: detail.into(),
        }
    }

    /// Creates a domain violation for a column.
    pub fn domain(column: Column, detail: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::DomainError,
            column: Some(column),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for RowViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "{} in column '{}': {}", self.kind, column, self.detail),
            None => write!(f, "{}: {}", self.kind, self.detail),
        }
    }
}

impl std::error::Error for RowViolation {}
