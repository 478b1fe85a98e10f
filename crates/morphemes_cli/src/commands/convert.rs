use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use morphemes_multext::MsdConverter;

use crate::output;

pub fn execute(input: &str, output_path: Option<&str>) -> Result<()> {
    info!("Converting dict_uk export: {}", input);

    let content =
        fs::read_to_string(input).with_context(|| format!("Failed to read input file: {input}"))?;

    let converter = MsdConverter::new();
    let conversion = converter.convert_text(&content);

    for skipped in &conversion.skipped {
        output::print_error(&format!(
            "line {} has fewer than three fields, copied through: {}",
            skipped.line, skipped.content
        ));
    }

    match output_path {
        Some(path) => {
            fs::write(path, &conversion.output)
                .with_context(|| format!("Failed to write output file: {path}"))?;
            output::print_success(&format!(
                "Converted {} line(s) into {}",
                conversion.converted, path
            ));
        }
        None => {
            print!("{}", conversion.output);
            output::print_success(&format!("Converted {} line(s)", conversion.converted));
        }
    }

    Ok(())
}
