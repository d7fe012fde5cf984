//! Report sinks: CSV and HTML rendering of a finished scan.
//!
//! Both sinks consume the in-memory result collection; the engine's contract
//! ends at handing them the ordered results and the summary. Output files get
//! a `_%Y%m%d_%H%M%S` timestamp appended to the configured base name.

mod csv;
mod html;

pub use csv::write_csv;
pub use html::{render_html, write_html};

use std::path::{Path, PathBuf};

use chrono::Local;

/// Timestamp fragment appended to report filenames.
pub fn report_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Inserts a timestamp between a base filename's stem and extension.
pub fn timestamped_path(base: &Path, timestamp: &str) -> PathBuf {
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("report");
    let name = match base.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_{timestamp}.{ext}"),
        None => format!("{stem}_{timestamp}"),
    };
    base.with_file_name(name)
}
