//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_recon` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Handing the ordered reports to the console and spreadsheet collaborators
//!
//! All core functionality is implemented in the library crate.

use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;

use domain_recon::config::WORKBOOK_PATH;
use domain_recon::initialization::init_logger_with;
use domain_recon::{active_columns, render_table, run_lookup, write_workbook, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Wrong arity or malformed flags exit 1 with clap's usage text on
    // stderr; --help and --version stay on stdout with exit 0.
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    if let Err(e) = init_logger_with(log_level.into(), log_format) {
        eprintln!("domain_recon error: {e}");
        process::exit(1);
    }

    match run_lookup(config).await {
        Ok(outcome) => {
            let columns = active_columns(&outcome.reports);
            println!("{}", render_table(&outcome.reports, &columns));

            if let Err(e) = write_workbook(&outcome.reports, &columns, Path::new(WORKBOOK_PATH)) {
                eprintln!("domain_recon error: {e:#}");
                process::exit(1);
            }
            println!("Results saved to {WORKBOOK_PATH}");

            println!(
                "✅ Checked {} domain{} ({} flagged for possible takeover) in {:.1}s",
                outcome.total_domains,
                if outcome.total_domains == 1 { "" } else { "s" },
                outcome.suspected(),
                outcome.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_recon error: {e:#}");
            process::exit(1);
        }
    }
}
