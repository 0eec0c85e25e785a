//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and the exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_audit::initialization::init_logger_with;
use site_audit::{run_audit, Config, FailOn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let fail_on = config.fail_on;

    // Run the audit using the library
    match run_audit(config).await {
        Ok(report) => {
            println!(
                "Inspected {} link{} across {} page{} in {:.1}s",
                report.summary.links,
                if report.summary.links == 1 { "" } else { "s" },
                report.pages,
                if report.pages == 1 { "" } else { "s" },
                report.elapsed_seconds
            );

            let failed = match fail_on {
                FailOn::Error => report.has_errors(),
                FailOn::Warning => report.has_findings(),
                FailOn::Never => false,
            };
            if failed {
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("site-audit error: {:#}", e);
            process::exit(1);
        }
    }
}
