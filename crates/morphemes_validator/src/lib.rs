//! # Ukrainian Morphemes Validator
//!
//! Row validation and corpus loading for the Ukrainian morpheme dataset.
//! This crate provides:
//!
//! - Per-row validation against a release layout (field counts, segmentation
//!   syntax, cross-field consistency, domain vocabularies)
//! - Total corpus loading that accepts every well-formed row and keeps the
//!   rejects with their violations
//! - Corpus statistics and release audit warnings
//! - Cross-release comparison that flags segmentation drift
//!
//! ## Example
//!
//! ```rust
//! use morphemes_core::{RawRow, SchemaVersion};
//! use morphemes_validator::{RowOutcome, RowValidator};
//!
//! let validator = RowValidator::new();
//!
//! let row = RawRow::new(1, vec!["у:P/кра:R/їн:S/а:F".into(), "3".into()]);
//! let outcome = validator.validate(&row, SchemaVersion::V02);
//! assert!(outcome.is_valid());
//!
//! let bad = RawRow::new(2, vec!["у:P/кра:R/їн:Z/а:F".into(), "3".into()]);
//! match validator.validate(&bad, SchemaVersion::V02) {
//!     RowOutcome::Invalid(violations) => {
//!         assert_eq!(violations[0].detail, "unknown type letter Z");
//!     }
//!     RowOutcome::Valid(_) => unreachable!(),
//! }
//! ```

mod corpus;
mod diff;
mod error;
mod row;
mod stats;

pub use corpus::*;
pub use diff::*;
pub use error::*;
pub use row::*;
pub use stats::*;
