//! Reader for the Ukrainian morpheme dataset release files.
//!
//! Release files are plain comma-separated text, one lemma per line, with an
//! optional header. This module splits lines into raw column fields and
//! works out which release layout a file uses, either from its header or
//! from an out-of-band declaration. No per-row checking happens here; rows
//! come out raw and the validator decides what to make of them.
//!
//! # Example
//!
//! ```rust
//! use morphemes_parser::read_str;
//! use morphemes_core::SchemaVersion;
//!
//! let content = "morph_tagged_lemma,tier\n\
//!                у:P/кра:R/їн:S/а:F,3\n\
//!                роб:R/и:S/ти:F,1\n";
//!
//! let parsed = read_str(content, None).unwrap();
//! assert_eq!(parsed.version, SchemaVersion::V02);
//! assert_eq!(parsed.rows.len(), 2);
//! assert_eq!(parsed.rows[0].line, 2);
//! ```

use std::path::Path;

use csv_core::ReadFieldResult;
use thiserror::Error;
use tracing::debug;

use morphemes_core::{RawRow, SchemaVersion};

/// Errors that can occur while reading a release file.
#[derive(Debug, Error)]
pub enum ParserError {
    /// File I/O error
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The declared version disagrees with the header found in the file
    #[error("declared schema {declared} does not match the {detected} header in the file")]
    VersionMismatch {
        /// Version declared out-of-band
        declared: SchemaVersion,
        /// Version recognised from the header
        detected: SchemaVersion,
    },

    /// A headerless file whose first row matches no known layout
    #[error("cannot infer a schema version from a {field_count}-field row; declare one explicitly")]
    UnrecognizedLayout {
        /// Field count of the first data row
        field_count: usize,
    },

    /// A file with neither rows nor header, and no declared version
    #[error("input carries no header and no rows; declare a schema version explicitly")]
    Empty,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// A read release file: the resolved layout and the raw rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFile {
    /// The column layout the rows follow
    pub version: SchemaVersion,
    /// Raw rows in file order, header excluded
    pub rows: Vec<RawRow>,
    /// True when the file opened with a recognised header line
    pub had_header: bool,
}

/// Splits one line into its comma-separated fields.
///
/// Quoted fields are honoured, so a lemma annotation containing a comma
/// survives splitting.
///
/// # Example
///
/// ```rust
/// use morphemes_parser::split_row;
///
/// let fields = split_row("у:P/кра:R/їн:S/а:F,3");
/// assert_eq!(fields, vec!["у:P/кра:R/їн:S/а:F", "3"]);
///
/// let quoted = split_row("\"кома, й усе\",3");
/// assert_eq!(quoted, vec!["кома, й усе", "3"]);
/// ```
pub fn split_row(row: &str) -> Vec<String> {
    let mut fields = vec![];
    let mut rdr = csv_core::Reader::new();
    let mut bytes = row.as_bytes();
    let mut output = [0; 4096];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        let end = match result {
            ReadFieldResult::InputEmpty => true,
            ReadFieldResult::Field { .. } => false,
            ReadFieldResult::End => true,
            _ => unreachable!(),
        };
        fields.push(String::from_utf8_lossy(&output[..nout]).into_owned());
        if end {
            break;
        }
        bytes = &bytes[nin..];
    }
    fields
}

/// Reads a release file from a string.
///
/// The layout is resolved in this order:
///
/// 1. a recognised header line, cross-checked against `declared` when both
///    are present;
/// 2. the `declared` version, for headerless files;
/// 3. the field count of the first data row.
///
/// Blank lines are skipped. Every surviving line becomes a [`RawRow`] with
/// its one-based line number; nothing is rejected here.
pub fn read_str(content: &str, declared: Option<SchemaVersion>) -> Result<ParsedFile> {
    // Spreadsheet exports sometimes open with a BOM.
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty())
        .collect();

    let Some(&(first_line, first_text)) = lines.first() else {
        return match declared {
            Some(version) => Ok(ParsedFile {
                version,
                rows: Vec::new(),
                had_header: false,
            }),
            None => Err(ParserError::Empty),
        };
    };

    let first_fields = split_row(first_text);
    let detected = SchemaVersion::from_header(&first_fields);

    let (version, had_header) = match (declared, detected) {
        (Some(declared), Some(detected)) => {
            if declared.columns() != detected.columns() {
                return Err(ParserError::VersionMismatch { declared, detected });
            }
            // Same column set, e.g. v0.1 declared over a two-column header.
            (declared, true)
        }
        (Some(declared), None) => (declared, false),
        (None, Some(detected)) => (detected, true),
        (None, None) => {
            let version = SchemaVersion::from_field_count(first_fields.len()).ok_or(
                ParserError::UnrecognizedLayout {
                    field_count: first_fields.len(),
                },
            )?;
            (version, false)
        }
    };

    debug!(
        "resolved schema {} ({}, {} line(s))",
        version,
        if had_header { "header" } else { "headerless" },
        lines.len()
    );

    let mut rows = Vec::with_capacity(lines.len());
    if !had_header {
        rows.push(RawRow::new(first_line, first_fields));
    }
    for &(line, text) in lines.iter().skip(1) {
        rows.push(RawRow::new(line, split_row(text)));
    }

    Ok(ParsedFile {
        version,
        rows,
        had_header,
    })
}

/// Reads a release file from disk.
pub fn read_file(path: &Path, declared: Option<SchemaVersion>) -> Result<ParsedFile> {
    let content = std::fs::read_to_string(path)?;
    read_str(&content, declared)
}
