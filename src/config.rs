//! Application configuration: CLI options, defaults, and constants.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

/// DKIM selectors probed when none are given on the command line.
pub const DEFAULT_DKIM_SELECTORS: &[&str] = &["default", "selector1", "selector2", "mail"];

/// Default per-query DNS timeout in seconds.
pub const DEFAULT_DNS_TIMEOUT_SECS: u64 = 3;

/// Default number of concurrently evaluated domains.
pub const DEFAULT_THREADS: usize = 10;

/// A progress line is logged after every this many completed domains.
pub const PROGRESS_LOG_EVERY: usize = 25;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command-line options and scan configuration.
///
/// This struct is generated by `clap` from the field attributes and doubles as
/// the library configuration; all options have defaults, so it can also be
/// built programmatically via [`Config::default`].
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// mail_audit --input-file domains.txt
///
/// # Against a specific nameserver with a tighter timeout
/// mail_audit -i domains.txt --nameserver 1.1.1.1 --timeout 2
///
/// # Probe custom DKIM selectors
/// mail_audit -i domains.txt --dkim-selectors google s1 s2
/// ```
#[derive(Parser, Debug, Clone)]
#[command(name = "mail_audit", version, about)]
pub struct Config {
    /// Path to a file with domain names, one per line
    #[arg(short = 'i', long, default_value = "domains.txt")]
    pub input_file: PathBuf,

    /// Base name for CSV output (a timestamp is appended)
    #[arg(long, default_value = "domain_check_results.csv")]
    pub output_csv: PathBuf,

    /// Base name for HTML output (a timestamp is appended)
    #[arg(long, default_value = "domain_check_results.html")]
    pub output_html: PathBuf,

    /// Number of domains evaluated concurrently
    #[arg(short = 't', long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Nameserver to query, as `ip` or `ip:port`; system default when unset
    #[arg(long)]
    pub nameserver: Option<String>,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DEFAULT_DNS_TIMEOUT_SECS)]
    pub timeout: u64,

    /// DKIM selectors to probe, in order
    #[arg(long = "dkim-selectors", num_args = 1.., default_values_t = DEFAULT_DKIM_SELECTORS.iter().map(ToString::to_string))]
    pub dkim_selectors: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("domains.txt"),
            output_csv: PathBuf::from("domain_check_results.csv"),
            output_html: PathBuf::from("domain_check_results.html"),
            threads: DEFAULT_THREADS,
            nameserver: None,
            timeout: DEFAULT_DNS_TIMEOUT_SECS,
            dkim_selectors: DEFAULT_DKIM_SELECTORS
                .iter()
                .map(ToString::to_string)
                .collect(),
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// The configured per-query DNS timeout as a [`Duration`].
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
