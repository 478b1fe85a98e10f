use anyhow::Result;
use tracing::info;

use morphemes_validator::{CorpusLoader, compare_releases};

use crate::commands::read_release;
use crate::output;

pub fn execute(
    old: &str,
    new: &str,
    old_schema_version: Option<&str>,
    new_schema_version: Option<&str>,
    format: &str,
) -> Result<()> {
    info!("Comparing releases: {} -> {}", old, new);

    let loader = CorpusLoader::new();

    let parsed_old = read_release(old, old_schema_version)?;
    let report_old = loader.load(parsed_old.version, parsed_old.rows);
    if !report_old.rejected.is_empty() {
        output::print_info(&format!(
            "{}: {} invalid row(s) excluded from the comparison",
            old,
            report_old.rejected.len()
        ));
    }

    let parsed_new = read_release(new, new_schema_version)?;
    let report_new = loader.load(parsed_new.version, parsed_new.rows);
    if !report_new.rejected.is_empty() {
        output::print_info(&format!(
            "{}: {} invalid row(s) excluded from the comparison",
            new,
            report_new.rejected.len()
        ));
    }

    let diff = compare_releases(&report_old.corpus, &report_new.corpus);

    output::print_diff_report(&diff, format);

    if !diff.passed() {
        std::process::exit(1);
    }

    Ok(())
}
