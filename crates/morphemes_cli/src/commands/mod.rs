pub mod convert;
pub mod diff;
pub mod stats;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use morphemes_core::SchemaVersion;
use morphemes_parser::ParsedFile;

/// Reads a release file, honouring an optional declared schema version.
pub(crate) fn read_release(path: &str, schema_version: Option<&str>) -> Result<ParsedFile> {
    let declared = match schema_version {
        Some(text) => Some(
            text.parse::<SchemaVersion>()
                .with_context(|| format!("Unrecognised schema version: {text}"))?,
        ),
        None => None,
    };

    morphemes_parser::read_file(Path::new(path), declared)
        .with_context(|| format!("Failed to read release file: {path}"))
}
