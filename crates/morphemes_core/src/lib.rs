//! # Ukrainian Morphemes Core
//!
//! Core record types for the Ukrainian morpheme dataset.
//!
//! This crate provides the building blocks shared by the parser, the validator
//! and the command-line tooling: the morpheme type vocabulary, segmentation
//! strings, dataset entries and the versioned column layouts the released
//! files use.
//!
//! ## Key Concepts
//!
//! - **Segmentation**: a lemma split into typed morphemes, written
//!   `morph:type/morph:type/...` (e.g. `у:P/кра:R/їн:S/а:F`)
//! - **Entry**: one accepted dataset row (lemma, segmentation, tier and the
//!   optional annotation columns of the newer layouts)
//! - **SchemaVersion**: the column layout of a released file (v0.1 through
//!   v0.4)
//!
//! ## Example
//!
//! ```rust
//! use morphemes_core::Segmentation;
//!
//! let seg: Segmentation = "у:P/кра:R/їн:S/а:F".parse().unwrap();
//! assert_eq!(seg.surface(), "україна");
//! assert_eq!(seg.pattern(), "PRSF");
//! assert_eq!(seg.to_string(), "у:P/кра:R/їн:S/а:F");
//! ```

pub mod builder;
pub mod entry;
pub mod error;
pub mod morpheme;
pub mod schema;

pub use builder::*;
pub use entry::*;
pub use error::*;
pub use morpheme::*;
pub use schema::*;
