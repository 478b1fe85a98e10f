//! Error types for the core record model.
//!
//! This module defines the parse errors raised while turning raw column text
//! into typed values: segmentation strings, tier labels, frequency codes and
//! schema version names.

use thiserror::Error;

/// Error type for segmentation string parsing.
///
/// The variants distinguish structural faults (missing or malformed type
/// tags, empty pieces) from vocabulary faults (a type letter outside the
/// closed set). Downstream validation maps the two groups to different
/// violation kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentationError {
    /// The whole segmentation string is empty
    #[error("segmentation string is empty")]
    Empty,

    /// A `/`-delimited piece is empty (leading, trailing or doubled slash)
    #[error("segment {index} is empty")]
    EmptySegment {
        /// Zero-based position of the offending segment
        index: usize,
    },

    /// A segment carries no `:` separator
    #[error("segment {index} has no type tag")]
    MissingType {
        /// Zero-based position of the offending segment
        index: usize,
    },

    /// A segment has a `:` but nothing before it
    #[error("segment {index} has an empty morph")]
    EmptyMorph {
        /// Zero-based position of the offending segment
        index: usize,
    },

    /// The text after `:` is not a single letter
    #[error("segment {index} has a malformed type tag '{tag}'")]
    MalformedType {
        /// Zero-based position of the offending segment
        index: usize,
        /// The offending tag text
        tag: String,
    },

    /// The type letter is not one of the seven known morpheme types
    #[error("unknown type letter {letter}")]
    UnknownType {
        /// Zero-based position of the offending segment
        index: usize,
        /// The offending letter
        letter: char,
    },
}

impl SegmentationError {
    /// Returns true when the error is a vocabulary fault rather than a
    /// structural one.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self, SegmentationError::UnknownType { .. })
    }
}

/// Error type for tier parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TierError {
    /// The tier column is not an integer
    #[error("tier '{0}' is not an integer")]
    NotAnInteger(String),

    /// The tier is an integer outside 1..=4
    #[error("tier {0} is outside the range 1-4")]
    OutOfRange(i64),
}

/// Error type for frequency code parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FreqCodeError {
    /// The frequency column is empty
    #[error("frequency code is empty")]
    Empty,

    /// No decimal digits before the exponent marker
    #[error("frequency code '{0}' has no leading digits")]
    MissingDigits(String),

    /// The character after the digits is not `e` or `E`
    #[error("frequency code '{0}' has no exponent marker")]
    MissingMarker(String),

    /// The bucket code after the marker is empty or not ASCII letters
    #[error("frequency code '{0}' has a malformed bucket code")]
    MalformedBucket(String),
}

/// Error returned when a schema version name cannot be recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown schema version '{0}', expected one of v0.1, v0.2, v0.3, v0.4")]
pub struct UnknownSchemaVersion(pub String);
