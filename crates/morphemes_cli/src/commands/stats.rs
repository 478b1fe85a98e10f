use anyhow::Result;
use tracing::info;

use morphemes_validator::CorpusLoader;

use crate::commands::read_release;
use crate::output;

pub fn execute(file: &str, schema_version: Option<&str>, format: &str) -> Result<()> {
    info!("Computing statistics for: {}", file);

    let parsed = read_release(file, schema_version)?;

    let loader = CorpusLoader::new();
    let report = loader.load(parsed.version, parsed.rows);

    if report.stats.rejected > 0 {
        output::print_info(&format!(
            "{} row(s) were rejected and are excluded from the per-entry counts",
            report.stats.rejected
        ));
    }

    output::print_stats(report.corpus.version(), &report.stats, format);

    Ok(())
}
