use colored::*;
use serde_json::json;

use morphemes_core::SchemaVersion;
use morphemes_validator::{CorpusStats, DiffReport, LoadReport};

pub fn print_load_report(file: &str, report: &LoadReport, format: &str) {
    match format {
        "json" => print_json_load_report(file, report),
        _ => print_text_load_report(report),
    }
}

fn print_text_load_report(report: &LoadReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if !report.rejected.is_empty() {
        println!("\n{}", "Rejected rows:".red().bold());
        for row in &report.rejected {
            for violation in &row.violations {
                println!("  line {}: {}", row.line, violation.to_string().red());
            }
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for (i, warning) in report.warnings.iter().enumerate() {
            println!("  {}. {}", i + 1, warning.yellow());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Schema version: {}", report.corpus.version());
    println!("  Total rows:     {}", report.stats.total_rows);
    println!("  Accepted:       {}", report.stats.accepted);
    println!("  Rejected:       {}", report.stats.rejected);
    println!("{}", "═".repeat(60));
}

fn print_json_load_report(file: &str, report: &LoadReport) {
    let output = json!({
        "file": file,
        "schema_version": report.corpus.version(),
        "passed": report.passed(),
        "rejected_rows": report.rejected,
        "warnings": report.warnings,
        "stats": report.stats,
        "generated_at": chrono::Utc::now().to_rfc3339(),
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_stats(version: SchemaVersion, stats: &CorpusStats, format: &str) {
    match format {
        "json" => print_json_stats(version, stats),
        _ => print_text_stats(version, stats),
    }
}

fn print_text_stats(version: SchemaVersion, stats: &CorpusStats) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  CORPUS STATISTICS".bold());
    println!("{}", "═".repeat(60));

    println!("\n  Schema version:   {}", version);
    println!("  Total rows:       {}", stats.total_rows);
    println!("  Accepted:         {}", stats.accepted);
    println!("  Rejected:         {}", stats.rejected);
    println!("  Unsegmented:      {}", stats.unsegmented);
    println!("  Ambiguous:        {}", stats.ambiguous);
    println!("  Duplicate lemmas: {}", stats.duplicate_lemmas);

    if !stats.per_tier.is_empty() {
        println!("\n{}", "Entries per tier:".bold());
        for (tier, count) in &stats.per_tier {
            println!("  tier {}: {}", tier, count);
        }
    }

    if !stats.per_pos.is_empty() {
        println!("\n{}", "Entries per part of speech:".bold());
        for (pos, count) in &stats.per_pos {
            println!("  {:<12} {}", pos, count);
        }
    }

    println!("{}", "═".repeat(60));
}

fn print_json_stats(version: SchemaVersion, stats: &CorpusStats) {
    let output = json!({
        "schema_version": version,
        "stats": stats,
        "generated_at": chrono::Utc::now().to_rfc3339(),
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_diff_report(report: &DiffReport, format: &str) {
    match format {
        "json" => print_json_diff_report(report),
        _ => print_text_diff_report(report),
    }
}

fn print_text_diff_report(report: &DiffReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  RELEASE COMPARISON".bold());
    println!("{}", "═".repeat(60));

    println!("\n  {} -> {}", report.old_version, report.new_version);

    if report.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Later release extends the earlier one".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Later release contradicts the earlier one".red().bold()
        );
    }

    if !report.missing.is_empty() {
        println!("\n{}", "Missing lemmas:".red().bold());
        for lemma in &report.missing {
            println!("  {}", lemma.red());
        }
    }

    if !report.contradicted.is_empty() {
        println!("\n{}", "Contradicted segmentations:".red().bold());
        for drift in &report.contradicted {
            println!("  {}: {} -> {}", drift.lemma.red(), drift.old, drift.new);
            println!("    {}", drift.detail.red());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Identical:    {}", report.identical);
    println!("  Refined:      {}", report.refined);
    println!("  Added:        {}", report.added);
    println!("  Missing:      {}", report.missing.len());
    println!("  Contradicted: {}", report.contradicted.len());
    println!("{}", "═".repeat(60));
}

fn print_json_diff_report(report: &DiffReport) {
    let output = json!({
        "old_version": report.old_version,
        "new_version": report.new_version,
        "passed": report.passed(),
        "missing": report.missing,
        "contradicted": report.contradicted,
        "identical": report.identical,
        "refined": report.refined,
        "added": report.added,
        "generated_at": chrono::Utc::now().to_rfc3339(),
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
