//! Morpheme types and segmentation strings.
//!
//! A segmentation is the heart of a dataset row: the lemma split into typed
//! morphemes, written as `morph:type` pieces joined by `/`. Older releases
//! also carry bare lemmas that were never segmented; those survive here as
//! [`Segmentation::Unsegmented`] so that loading stays total.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SegmentationError;

/// The closed vocabulary of morpheme types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphType {
    /// Root (`R`)
    Root,
    /// Prefix (`P`)
    Prefix,
    /// Suffix (`S`)
    Suffix,
    /// Interfix (`I`), the linking vowel of compounds
    Interfix,
    /// Flexion (`F`), the inflectional ending
    Flexion,
    /// Hyphen (`H`), kept as a morpheme of its own in hyphenated compounds
    Hyphen,
    /// Postfix (`X`), e.g. the reflexive `ся`
    Postfix,
}

impl MorphType {
    /// All morpheme types, in pattern-letter order.
    pub const ALL: [MorphType; 7] = [
        MorphType::Root,
        MorphType::Prefix,
        MorphType::Suffix,
        MorphType::Interfix,
        MorphType::Flexion,
        MorphType::Hyphen,
        MorphType::Postfix,
    ];

    /// Returns the type for a tag letter, or `None` for anything outside the
    /// closed set.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(MorphType::Root),
            'P' => Some(MorphType::Prefix),
            'S' => Some(MorphType::Suffix),
            'I' => Some(MorphType::Interfix),
            'F' => Some(MorphType::Flexion),
            'H' => Some(MorphType::Hyphen),
            'X' => Some(MorphType::Postfix),
            _ => None,
        }
    }

    /// The single-letter tag used in segmentation strings and patterns.
    pub fn letter(&self) -> char {
        match self {
            MorphType::Root => 'R',
            MorphType::Prefix => 'P',
            MorphType::Suffix => 'S',
            MorphType::Interfix => 'I',
            MorphType::Flexion => 'F',
            MorphType::Hyphen => 'H',
            MorphType::Postfix => 'X',
        }
    }
}

impl fmt::Display for MorphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One morpheme: a surface string plus its type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Morpheme {
    /// The surface text, e.g. `кра`
    pub surface: String,
    /// The morpheme type, e.g. [`MorphType::Root`]
    pub morph_type: MorphType,
}

impl Morpheme {
    /// Creates a morpheme from a surface string and a type.
    pub fn new(surface: impl Into<String>, morph_type: MorphType) -> Self {
        Self {
            surface: surface.into(),
            morph_type,
        }
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.surface, self.morph_type)
    }
}

/// A lemma's segmentation into typed morphemes.
///
/// Parsing and [`fmt::Display`] round-trip: for any string this type accepts,
/// formatting the parsed value reproduces the input byte for byte.
///
/// # Example
///
/// ```rust
/// use morphemes_core::{MorphType, Segmentation};
///
/// let seg: Segmentation = "роб:R/и:S/ти:F".parse().unwrap();
/// assert_eq!(seg.surface(), "робити");
/// assert_eq!(seg.pattern(), "RSF");
/// assert!(seg.has_root());
///
/// // Legacy rows may carry a bare, unsegmented lemma.
/// let bare: Segmentation = "авжеж".parse().unwrap();
/// assert!(bare.is_unsegmented());
/// assert_eq!(bare.pattern(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segmentation {
    /// A fully tagged morpheme sequence
    Tagged(Vec<Morpheme>),
    /// A bare lemma from a release that predates segmentation
    Unsegmented(String),
}

impl Segmentation {
    /// The morphemes of a tagged segmentation, or an empty slice for an
    /// unsegmented lemma.
    pub fn morphemes(&self) -> &[Morpheme] {
        match self {
            Segmentation::Tagged(morphemes) => morphemes,
            Segmentation::Unsegmented(_) => &[],
        }
    }

    /// Number of morphemes (zero for unsegmented lemmas).
    pub fn len(&self) -> usize {
        self.morphemes().len()
    }

    /// True when no morphemes are present.
    pub fn is_empty(&self) -> bool {
        self.morphemes().is_empty()
    }

    /// True for a bare lemma without morpheme tags.
    pub fn is_unsegmented(&self) -> bool {
        matches!(self, Segmentation::Unsegmented(_))
    }

    /// The surface form: morphemes concatenated in order, or the bare lemma
    /// itself.
    pub fn surface(&self) -> String {
        match self {
            Segmentation::Tagged(morphemes) => {
                morphemes.iter().map(|m| m.surface.as_str()).collect()
            }
            Segmentation::Unsegmented(lemma) => lemma.clone(),
        }
    }

    /// The pattern string: one type letter per morpheme, in order (e.g.
    /// `PRSF`). Empty for unsegmented lemmas.
    pub fn pattern(&self) -> String {
        match self {
            Segmentation::Tagged(morphemes) => {
                morphemes.iter().map(|m| m.morph_type.letter()).collect()
            }
            Segmentation::Unsegmented(_) => String::new(),
        }
    }

    /// True when at least one morpheme is tagged as a root.
    pub fn has_root(&self) -> bool {
        self.morphemes()
            .iter()
            .any(|m| m.morph_type == MorphType::Root)
    }
}

impl FromStr for Segmentation {
    type Err = SegmentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SegmentationError::Empty);
        }

        // Bare lemmas carry neither tags nor separators.
        if !s.contains(':') && !s.contains('/') {
            return Ok(Segmentation::Unsegmented(s.to_string()));
        }

        let mut morphemes = Vec::new();
        for (index, segment) in s.split('/').enumerate() {
            if segment.is_empty() {
                return Err(SegmentationError::EmptySegment { index });
            }
            let Some((surface, tag)) = segment.rsplit_once(':') else {
                return Err(SegmentationError::MissingType { index });
            };
            if surface.is_empty() {
                return Err(SegmentationError::EmptyMorph { index });
            }
            let mut tag_chars = tag.chars();
            let letter = match (tag_chars.next(), tag_chars.next()) {
                (Some(letter), None) => letter,
                _ => {
                    return Err(SegmentationError::MalformedType {
                        index,
                        tag: tag.to_string(),
                    });
                }
            };
            let morph_type = MorphType::from_letter(letter)
                .ok_or(SegmentationError::UnknownType { index, letter })?;
            morphemes.push(Morpheme::new(surface, morph_type));
        }

        Ok(Segmentation::Tagged(morphemes))
    }
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segmentation::Tagged(morphemes) => {
                for (i, morpheme) in morphemes.iter().enumerate() {
                    if i > 0 {
                        write!(f, "/")?;
                    }
                    write!(f, "{morpheme}")?;
                }
                Ok(())
            }
            Segmentation::Unsegmented(lemma) => f.write_str(lemma),
        }
    }
}

// Segmentations serialize as their canonical string form so that JSON
// reports stay readable.
impl Serialize for Segmentation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Segmentation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_tagged_segmentation() {
        let seg: Segmentation = "у:P/кра:R/їн:S/а:F".parse().unwrap();
        assert_eq!(seg.len(), 4);
        assert_eq!(seg.surface(), "україна");
        assert_eq!(seg.pattern(), "PRSF");
        assert!(seg.has_root());
        assert!(!seg.is_unsegmented());
    }

    #[test]
    fn test_parse_unsegmented_lemma() {
        let seg: Segmentation = "авжеж".parse().unwrap();
        assert!(seg.is_unsegmented());
        assert_eq!(seg.surface(), "авжеж");
        assert_eq!(seg.pattern(), "");
        assert!(!seg.has_root());
    }

    #[test]
    fn test_hyphenated_lemma_without_tags_is_unsegmented() {
        let seg: Segmentation = "будь-що".parse().unwrap();
        assert!(seg.is_unsegmented());
        assert_eq!(seg.surface(), "будь-що");
    }

    #[test]
    fn test_hyphen_as_morpheme() {
        let seg: Segmentation = "жовт:R/о:I/-:H/блакит:R/н:S/ий:F".parse().unwrap();
        assert_eq!(seg.surface(), "жовто-блакитний");
        assert_eq!(seg.pattern(), "RIHRSF");
    }

    #[test]
    fn test_round_trip() {
        for input in [
            "у:P/кра:R/їн:S/а:F",
            "роб:R/и:S/ти:F",
            "смі:R/я:S/ти:F/ся:X",
            "авжеж",
        ] {
            let seg: Segmentation = input.parse().unwrap();
            assert_eq!(seg.to_string(), input);
        }
    }

    #[test]
    fn test_unknown_type_letter() {
        let err = "у:P/кра:R/їн:Z/а:F".parse::<Segmentation>().unwrap_err();
        assert_eq!(err, SegmentationError::UnknownType { index: 2, letter: 'Z' });
        assert!(err.is_unknown_type());
        assert_eq!(err.to_string(), "unknown type letter Z");
    }

    #[test]
    fn test_lowercase_type_letter_is_unknown() {
        let err = "роб:r/ити:F".parse::<Segmentation>().unwrap_err();
        assert_eq!(err, SegmentationError::UnknownType { index: 0, letter: 'r' });
    }

    #[test]
    fn test_missing_type_tag() {
        let err = "у:P/кра".parse::<Segmentation>().unwrap_err();
        assert_eq!(err, SegmentationError::MissingType { index: 1 });
        assert!(!err.is_unknown_type());
    }

    #[test]
    fn test_empty_segment() {
        let err = "у:P//кра:R".parse::<Segmentation>().unwrap_err();
        assert_eq!(err, SegmentationError::EmptySegment { index: 1 });

        let err = "у:P/".parse::<Segmentation>().unwrap_err();
        assert_eq!(err, SegmentationError::EmptySegment { index: 1 });
    }

    #[test]
    fn test_empty_morph() {
        let err = ":F".parse::<Segmentation>().unwrap_err();
        assert_eq!(err, SegmentationError::EmptyMorph { index: 0 });
    }

    #[test]
    fn test_malformed_type_tag() {
        let err = "кра:RS".parse::<Segmentation>().unwrap_err();
        assert_eq!(
            err,
            SegmentationError::MalformedType { index: 0, tag: "RS".to_string() }
        );

        let err = "кра:".parse::<Segmentation>().unwrap_err();
        assert_eq!(
            err,
            SegmentationError::MalformedType { index: 0, tag: String::new() }
        );
    }

    #[test]
    fn test_empty_string_rejected() {
        let err = "".parse::<Segmentation>().unwrap_err();
        assert_eq!(err, SegmentationError::Empty);
    }

    #[test]
    fn test_slash_without_tags_is_not_unsegmented() {
        let err = "кра/їн".parse::<Segmentation>().unwrap_err();
        assert_eq!(err, SegmentationError::MissingType { index: 0 });
    }

    #[test]
    fn test_serde_round_trip() {
        let seg: Segmentation = "роб:R/и:S/ти:F".parse().unwrap();
        let json = serde_json::to_string(&seg).unwrap();
        assert_eq!(json, "\"роб:R/и:S/ти:F\"");
        let back: Segmentation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seg);
    }

    #[test]
    fn test_morph_type_letters() {
        for morph_type in MorphType::ALL {
            assert_eq!(MorphType::from_letter(morph_type.letter()), Some(morph_type));
        }
        assert_eq!(MorphType::from_letter('Z'), None);
        assert_eq!(MorphType::from_letter('r'), None);
    }
}
