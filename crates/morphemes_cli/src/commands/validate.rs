use anyhow::Result;
use tracing::info;

use morphemes_validator::CorpusLoader;

use crate::commands::read_release;
use crate::output;

pub fn execute(file: &str, schema_version: Option<&str>, strict: bool, format: &str) -> Result<()> {
    info!("Validating release file: {}", file);
    info!("Strict mode: {}", strict);

    let parsed = read_release(file, schema_version)?;

    output::print_info(&format!(
        "Release loaded: schema {}, {} row(s){}",
        parsed.version,
        parsed.rows.len(),
        if parsed.had_header {
            ", header line"
        } else {
            ", no header"
        }
    ));

    let loader = CorpusLoader::new();
    let report = loader.load(parsed.version, parsed.rows);

    output::print_load_report(file, &report, format);

    if !report.passed() || (strict && !report.warnings.is_empty()) {
        std::process::exit(1);
    }

    Ok(())
}
