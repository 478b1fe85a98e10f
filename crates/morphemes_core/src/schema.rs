//! Versioned column layouts of the released dataset files.
//!
//! Every release ships as plain comma-separated text. What changed between
//! releases is the column set: the early files carried only the tagged lemma
//! and its tier, v0.3 added the annotation columns and v0.4 added corpus
//! frequency and the inflectional paradigm. The layouts are fixed here so
//! the rest of the tooling can address fields by name instead of position.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::UnknownSchemaVersion;

/// A named dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// MULTEXT-East morphosyntactic descriptor
    Multext,
    /// Part-of-speech label (verbatim; `;`-joined when taggers disagree)
    Pos,
    /// Corpus frequency code, mantissa plus exponent bucket
    Freq,
    /// Inflectional paradigm code
    Paradigm,
    /// The segmentation string, `morph:type` pieces joined by `/`
    MorphTaggedLemma,
    /// Root form(s), normalized for phonological alternation
    Root,
    /// Provenance/confidence tier
    Tier,
    /// Homonymy flag (empty means unambiguous)
    Ambiguity,
    /// The plain lemma
    Lemma,
    /// The lemma reversed character by character
    ReversedLemma,
    /// Derived morpheme-type pattern, e.g. `PRSF`
    Pattern,
}

impl Column {
    /// The header spelling of the column.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Multext => "multext",
            Column::Pos => "pos",
            Column::Freq => "freq",
            Column::Paradigm => "paradigm",
            Column::MorphTaggedLemma => "morph_tagged_lemma",
            Column::Root => "root",
            Column::Tier => "tier",
            Column::Ambiguity => "ambiguity",
            Column::Lemma => "lemma",
            Column::ReversedLemma => "reversed_lemma",
            Column::Pattern => "Pattern",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "multext" => Some(Column::Multext),
            "pos" => Some(Column::Pos),
            "freq" => Some(Column::Freq),
            "paradigm" => Some(Column::Paradigm),
            "morph_tagged_lemma" => Some(Column::MorphTaggedLemma),
            "root" => Some(Column::Root),
            "tier" => Some(Column::Tier),
            "ambiguity" => Some(Column::Ambiguity),
            "lemma" => Some(Column::Lemma),
            "reversed_lemma" => Some(Column::ReversedLemma),
            "Pattern" => Some(Column::Pattern),
            _ => None,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Columns appear in JSON reports under their header spelling.
impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Column {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Column::from_name(&name)
            .ok_or_else(|| D::Error::custom(format!("unknown column '{name}'")))
    }
}

const COLUMNS_V01: &[Column] = &[Column::MorphTaggedLemma, Column::Tier];

const COLUMNS_V03: &[Column] = &[
    Column::Multext,
    Column::Pos,
    Column::MorphTaggedLemma,
    Column::Root,
    Column::Tier,
    Column::Ambiguity,
    Column::Lemma,
    Column::ReversedLemma,
    Column::Pattern,
];

const COLUMNS_V04: &[Column] = &[
    Column::Multext,
    Column::Pos,
    Column::Freq,
    Column::Paradigm,
    Column::MorphTaggedLemma,
    Column::Root,
    Column::Tier,
    Column::Ambiguity,
    Column::Lemma,
    Column::ReversedLemma,
    Column::Pattern,
];

/// A released column layout.
///
/// v0.1 and v0.2 share the same two columns; a bare file cannot tell them
/// apart, so detection reports v0.2 and the caller may override it with an
/// out-of-band declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaVersion {
    /// First public release, tagged lemma and tier only
    #[serde(rename = "v0.1")]
    V01,
    /// Same columns as v0.1 after the segmentation revision pass
    #[serde(rename = "v0.2")]
    V02,
    /// Adds MULTEXT, part of speech, root, ambiguity, lemma, reversed lemma
    /// and the derived pattern
    #[serde(rename = "v0.3")]
    V03,
    /// Adds corpus frequency and the inflectional paradigm
    #[serde(rename = "v0.4")]
    V04,
}

impl SchemaVersion {
    /// All versions, oldest first.
    pub const ALL: [SchemaVersion; 4] = [
        SchemaVersion::V01,
        SchemaVersion::V02,
        SchemaVersion::V03,
        SchemaVersion::V04,
    ];

    /// The column layout of this version, in file order.
    pub fn columns(&self) -> &'static [Column] {
        match self {
            SchemaVersion::V01 | SchemaVersion::V02 => COLUMNS_V01,
            SchemaVersion::V03 => COLUMNS_V03,
            SchemaVersion::V04 => COLUMNS_V04,
        }
    }

    /// Number of columns a row of this version must have.
    pub fn field_count(&self) -> usize {
        self.columns().len()
    }

    /// Position of a column in this layout, if the column exists in it.
    pub fn index_of(&self, column: Column) -> Option<usize> {
        self.columns().iter().position(|c| *c == column)
    }

    /// True when the layout carries the column at all.
    pub fn has_column(&self, column: Column) -> bool {
        self.index_of(column).is_some()
    }

    /// The header line of this version.
    pub fn header(&self) -> String {
        self.columns()
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Recognises a header row. Two-column headers report [`SchemaVersion::V02`].
    pub fn from_header(fields: &[String]) -> Option<SchemaVersion> {
        let named: Option<Vec<Column>> =
            fields.iter().map(|f| Column::from_name(f)).collect();
        let named = named?;
        [SchemaVersion::V02, SchemaVersion::V03, SchemaVersion::V04]
            .into_iter()
            .find(|v| v.columns() == named.as_slice())
    }

    /// Infers a version from a bare row's field count. Two fields report
    /// [`SchemaVersion::V02`].
    pub fn from_field_count(count: usize) -> Option<SchemaVersion> {
        match count {
            2 => Some(SchemaVersion::V02),
            9 => Some(SchemaVersion::V03),
            11 => Some(SchemaVersion::V04),
            _ => None,
        }
    }

    /// The release name, e.g. `v0.4`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVersion::V01 => "v0.1",
            SchemaVersion::V02 => "v0.2",
            SchemaVersion::V03 => "v0.3",
            SchemaVersion::V04 => "v0.4",
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = UnknownSchemaVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().strip_prefix('v').unwrap_or(s.trim()) {
            "0.1" => Ok(SchemaVersion::V01),
            "0.2" => Ok(SchemaVersion::V02),
            "0.3" => Ok(SchemaVersion::V03),
            "0.4" => Ok(SchemaVersion::V04),
            _ => Err(UnknownSchemaVersion(s.to_string())),
        }
    }
}

/// An unvalidated dataset row: the raw column fields plus the line they came
/// from, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// One-based line number in the source file
    pub line: usize,
    /// The raw column fields, in file order
    pub fields: Vec<String>,
}

impl RawRow {
    /// Creates a raw row.
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Looks up a field by column name under the given layout.
    ///
    /// Returns `None` when the layout lacks the column or the row is too
    /// short for it.
    pub fn field(&self, version: SchemaVersion, column: Column) -> Option<&str> {
        version
            .index_of(column)
            .and_then(|i| self.fields.get(i))
            .map(String::as_str)
    }
}
