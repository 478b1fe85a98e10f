//! Dataset entries and their annotation values.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FreqCodeError, TierError};
use crate::morpheme::Segmentation;

/// Provenance/confidence tier of an entry, from 1 (manually verified) to
/// 4 (automatically derived, unreviewed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tier(u8);

impl Tier {
    /// All four tiers, most trusted first.
    pub const ALL: [Tier; 4] = [Tier(1), Tier(2), Tier(3), Tier(4)];

    /// Creates a tier, rejecting values outside 1..=4.
    pub fn new(value: u8) -> Result<Self, TierError> {
        if (1..=4).contains(&value) {
            Ok(Tier(value))
        } else {
            Err(TierError::OutOfRange(i64::from(value)))
        }
    }

    /// The numeric tier label.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl FromStr for Tier {
    type Err = TierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| TierError::NotAnInteger(s.to_string()))?;
        if (1..=4).contains(&value) {
            Ok(Tier(value as u8))
        } else {
            Err(TierError::OutOfRange(value))
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Tier::new(value).map_err(D::Error::custom)
    }
}

/// A corpus frequency code: decimal mantissa, an `e` or `E` exponent marker
/// and a letter bucket, e.g. `21ea`.
///
/// Only the shape is enforced; the bucket alphabet is an artifact of the
/// frequency extraction run and is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FreqCode {
    /// The decimal mantissa digits
    pub mantissa: u64,
    /// The marker as written, `e` or `E`
    pub marker: char,
    /// The exponent bucket letters, verbatim
    pub bucket: String,
}

impl FromStr for FreqCode {
    type Err = FreqCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FreqCodeError::Empty);
        }
        let digits_end = s
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        if digits_end == 0 {
            return Err(FreqCodeError::MissingDigits(s.to_string()));
        }
        let (digits, rest) = s.split_at(digits_end);
        let mantissa: u64 = digits
            .parse()
            .map_err(|_| FreqCodeError::MissingDigits(s.to_string()))?;
        let mut rest_chars = rest.chars();
        let marker = match rest_chars.next() {
            Some(c @ ('e' | 'E')) => c,
            _ => return Err(FreqCodeError::MissingMarker(s.to_string())),
        };
        let bucket = rest_chars.as_str();
        if bucket.is_empty() || !bucket.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FreqCodeError::MalformedBucket(s.to_string()));
        }
        Ok(FreqCode {
            mantissa,
            marker,
            bucket: bucket.to_string(),
        })
    }
}

impl fmt::Display for FreqCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.mantissa, self.marker, self.bucket)
    }
}

impl Serialize for FreqCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FreqCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// One accepted dataset row.
///
/// The first two fields exist in every release; the rest arrived with v0.3
/// and v0.4 and are `None` for rows loaded from older layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The plain lemma (derived from the segmentation in two-column layouts)
    pub lemma: String,
    /// The segmentation, tagged or bare
    pub segmentation: Segmentation,
    /// Provenance/confidence tier
    pub tier: Tier,
    /// MULTEXT-East descriptor, v0.3+
    pub multext: Option<String>,
    /// Part-of-speech label, verbatim, v0.3+
    pub pos: Option<String>,
    /// Corpus frequency code, v0.4+
    pub freq: Option<FreqCode>,
    /// Inflectional paradigm code, v0.4+
    pub paradigm: Option<String>,
    /// Root form(s), `;`-separated when alternations produce several, v0.3+
    pub root: Option<String>,
    /// True when the ambiguity column was non-empty
    pub ambiguous: bool,
}

impl Entry {
    /// The derived morpheme-type pattern, e.g. `PRSF`.
    pub fn pattern(&self) -> String {
        self.segmentation.pattern()
    }

    /// The lemma reversed character by character.
    pub fn reversed_lemma(&self) -> String {
        self.lemma.chars().rev().collect()
    }

    /// The root forms of the row, split on `;`. Empty for older layouts and
    /// for rows whose root column is empty.
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.root
            .as_deref()
            .unwrap_or("")
            .split(';')
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }

    /// True for a bare lemma carried over from a release that predates
    /// segmentation.
    pub fn is_unsegmented(&self) -> bool {
        self.segmentation.is_unsegmented()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::EntryBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tier_range() {
        assert!(Tier::new(1).is_ok());
        assert!(Tier::new(4).is_ok());
        assert_eq!(Tier::new(0), Err(TierError::OutOfRange(0)));
        assert_eq!(Tier::new(5), Err(TierError::OutOfRange(5)));
    }

    #[test]
    fn test_tier_from_str() {
        assert_eq!("3".parse::<Tier>().unwrap().get(), 3);
        assert_eq!(" 2 ".parse::<Tier>().unwrap().get(), 2);
        assert_eq!("7".parse::<Tier>(), Err(TierError::OutOfRange(7)));
        assert_eq!(
            "first".parse::<Tier>(),
            Err(TierError::NotAnInteger("first".to_string()))
        );
    }

    #[test]
    fn test_freq_code_parse() {
        let code: FreqCode = "21ea".parse().unwrap();
        assert_eq!(code.mantissa, 21);
        assert_eq!(code.marker, 'e');
        assert_eq!(code.bucket, "a");
        assert_eq!(code.to_string(), "21ea");

        let upper: FreqCode = "7Eb".parse().unwrap();
        assert_eq!(upper.marker, 'E');
    }

    #[test]
    fn test_freq_code_rejects_malformed() {
        assert_eq!("".parse::<FreqCode>(), Err(FreqCodeError::Empty));
        assert_eq!(
            "ea".parse::<FreqCode>(),
            Err(FreqCodeError::MissingDigits("ea".to_string()))
        );
        assert_eq!(
            "21".parse::<FreqCode>(),
            Err(FreqCodeError::MissingMarker("21".to_string()))
        );
        assert_eq!(
            "21xa".parse::<FreqCode>(),
            Err(FreqCodeError::MissingMarker("21xa".to_string()))
        );
        assert_eq!(
            "21e".parse::<FreqCode>(),
            Err(FreqCodeError::MalformedBucket("21e".to_string()))
        );
        assert_eq!(
            "21e9".parse::<FreqCode>(),
            Err(FreqCodeError::MalformedBucket("21e9".to_string()))
        );
    }

    #[test]
    fn test_entry_derived_fields() {
        let entry = EntryBuilder::new("україна", Tier::new(3).unwrap())
            .segmentation("у:P/кра:R/їн:S/а:F".parse().unwrap())
            .root("кра")
            .build();
        assert_eq!(entry.pattern(), "PRSF");
        assert_eq!(entry.reversed_lemma(), "анїарку");
        assert_eq!(entry.roots().collect::<Vec<_>>(), vec!["кра"]);
        assert!(!entry.is_unsegmented());
    }

    #[test]
    fn test_entry_multiple_roots() {
        let entry = EntryBuilder::new("сміятися", Tier::new(2).unwrap())
            .segmentation("смі:R/я:S/ти:F/ся:X".parse().unwrap())
            .root("смі;сміх")
            .build();
        assert_eq!(entry.roots().collect::<Vec<_>>(), vec!["смі", "сміх"]);
    }
}
