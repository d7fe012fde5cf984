//! mail_audit library: email-authentication auditing for domain lists
//!
//! This library resolves and validates SPF, DKIM, and DMARC DNS records for a
//! list of domains, then classifies each domain's spoofing exposure and
//! subdomain-takeover risk. Record checks are presence/shape checks only: the
//! engine does not evaluate SPF include chains, verify DKIM signatures, or
//! parse DMARC aggregate reports.
//!
//! # Example
//!
//! ```no_run
//! use mail_audit::{run_scan, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input_file: std::path::PathBuf::from("domains.txt"),
//!     threads: 20,
//!     ..Default::default()
//! };
//!
//! let outcome = run_scan(&config).await?;
//! println!(
//!     "Scanned {} domains: {} vulnerable to spoofing",
//!     outcome.summary.total_domains, outcome.summary.vulnerable
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions from within an async context.

#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod report;
pub mod resolver;
pub mod scanner;
pub mod validators;

// Re-export public API
pub use config::{Config, LogLevel};
pub use models::{DomainResult, ProtocolVerdict, ScanSummary};
pub use scanner::{run_scan, scan_domains, ScanOutcome};
