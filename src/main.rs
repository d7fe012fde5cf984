//! Main application entry point (CLI binary).
//!
//! Thin wrapper around the `mail_audit` library: parses arguments,
//! initializes logging, runs the scan, writes the CSV and HTML reports, and
//! prints the user-facing summary. All evaluation logic lives in the library.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use mail_audit::initialization::init_logger;
use mail_audit::report::{write_csv, write_html};
use mail_audit::{run_scan, Config};

const BANNER: &str = r"
 -------------------------------------------------
   mail_audit  ::  SPF  |  DKIM  |  DMARC  scanner
 -------------------------------------------------";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_logger(config.log_level.clone().into()).context("Failed to initialize logger")?;

    println!("{BANNER}\n");

    match run_scan(&config).await {
        Ok(outcome) => {
            let csv_path = write_csv(&outcome.results, &config.output_csv)?;
            let html_path = write_html(&outcome.results, &outcome.summary, &config.output_html)?;

            let summary = &outcome.summary;
            println!(
                "Scanned {} domain{} in {:.2}s",
                summary.total_domains,
                if summary.total_domains == 1 { "" } else { "s" },
                summary.elapsed_seconds
            );

            let vulnerable = format!("{} vulnerable to spoofing", summary.vulnerable);
            println!(
                "  {}",
                if summary.vulnerable > 0 {
                    vulnerable.red()
                } else {
                    vulnerable.green()
                }
            );
            let takeover = format!("{} potential subdomain takeover(s)", summary.takeover_risk);
            println!(
                "  {}",
                if summary.takeover_risk > 0 {
                    takeover.yellow()
                } else {
                    takeover.green()
                }
            );
            if summary.evaluation_errors > 0 {
                println!(
                    "  {}",
                    format!("{} domain(s) could not be evaluated", summary.evaluation_errors).red()
                );
            }

            println!(
                "Results saved to {} and {}",
                csv_path.display(),
                html_path.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("mail_audit error: {e:#}");
            process::exit(1);
        }
    }
}
