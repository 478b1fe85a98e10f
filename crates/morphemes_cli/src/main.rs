mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ukm")]
#[command(version, about = "Ukrainian morpheme dataset toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a release file row by row
    Validate {
        /// Path to the release file
        file: String,

        /// Schema version to expect, e.g. "v0.4" (detected when omitted)
        #[arg(short, long)]
        schema_version: Option<String>,

        /// Fail when audit warnings are present
        #[arg(long)]
        strict: bool,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print aggregate statistics for a release file
    Stats {
        /// Path to the release file
        file: String,

        /// Schema version to expect, e.g. "v0.4" (detected when omitted)
        #[arg(short, long)]
        schema_version: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Compare two releases, oldest first
    Diff {
        /// Path to the earlier release file
        old: String,

        /// Path to the later release file
        new: String,

        /// Schema version of the earlier file (detected when omitted)
        #[arg(long)]
        old_schema_version: Option<String>,

        /// Schema version of the later file (detected when omitted)
        #[arg(long)]
        new_schema_version: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Convert a dict_uk export to MULTEXT-East MSD codes
    Convert {
        /// Path to the dict_uk export
        input: String,

        /// Output file path (defaults to stdout)
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            file,
            schema_version,
            strict,
            format,
        } => commands::validate::execute(&file, schema_version.as_deref(), strict, &format),

        Commands::Stats {
            file,
            schema_version,
            format,
        } => commands::stats::execute(&file, schema_version.as_deref(), &format),

        Commands::Diff {
            old,
            new,
            old_schema_version,
            new_schema_version,
            format,
        } => commands::diff::execute(
            &old,
            &new,
            old_schema_version.as_deref(),
            new_schema_version.as_deref(),
            &format,
        ),

        Commands::Convert { input, output } => {
            commands::convert::execute(&input, output.as_deref())
        }
    }
}
