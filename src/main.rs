//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `neo4j_schema_export` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;

use neo4j_schema_export::config::Opt;
use neo4j_schema_export::initialization::init_logger_with;
use neo4j_schema_export::{run_export, Config, ExportReport};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load NEO4J_* variables from a .env file (if it exists) before clap reads the environment
    let _ = dotenvy::dotenv();

    let config: Config = Opt::parse().into();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Caught failures are reported on stdout and the process still exits normally
    match run_export(config).await {
        Ok(report) => println!("{}", success_message(&report)),
        Err(e) => println!("{}", e),
    }
    Ok(())
}

fn success_message(report: &ExportReport) -> String {
    let dir = report.output_dir.display().to_string();
    format!(
        "Schema exported to separate YAML files in {}/",
        dir.trim_end_matches('/')
    )
}
