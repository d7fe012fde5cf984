//! CSV export of scan results.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::Writer;
use serde::Serialize;

use super::{report_timestamp, timestamped_path};
use crate::models::DomainResult;

/// One flattened CSV row per domain.
#[derive(Serialize)]
struct CsvRow<'a> {
    domain: &'a str,
    spf_found: bool,
    spf_well_formed: bool,
    spf_record: Option<&'a str>,
    dkim_found: bool,
    dkim_well_formed: bool,
    dkim_selector: Option<&'a str>,
    dkim_record: Option<&'a str>,
    dmarc_found: bool,
    dmarc_well_formed: bool,
    dmarc_policy: Option<&'a str>,
    dmarc_record: Option<&'a str>,
    nxdomain: bool,
    spoofing_vulnerable: bool,
    takeover_risk: bool,
    evaluation_error: bool,
    elapsed_seconds: f64,
}

impl<'a> From<&'a DomainResult> for CsvRow<'a> {
    fn from(result: &'a DomainResult) -> Self {
        Self {
            domain: &result.domain,
            spf_found: result.spf.found,
            spf_well_formed: result.spf.well_formed,
            spf_record: result.spf.raw_record.as_deref(),
            dkim_found: result.dkim.found,
            dkim_well_formed: result.dkim.well_formed,
            dkim_selector: result.dkim_selector.as_deref(),
            dkim_record: result.dkim.raw_record.as_deref(),
            dmarc_found: result.dmarc.found,
            dmarc_well_formed: result.dmarc.well_formed,
            dmarc_policy: result.dmarc.policy.as_deref(),
            dmarc_record: result.dmarc.raw_record.as_deref(),
            nxdomain: result.nxdomain,
            spoofing_vulnerable: result.spoofing_vulnerable,
            takeover_risk: result.takeover_risk,
            evaluation_error: result.evaluation_error,
            elapsed_seconds: result.elapsed_seconds,
        }
    }
}

/// Writes the scan results to a timestamped CSV file.
///
/// `base` is the configured base filename; the timestamp is inserted before
/// its extension. Returns the path actually written.
///
/// # Errors
///
/// Returns an error if the output file cannot be created or written.
pub fn write_csv(results: &[DomainResult], base: &Path) -> Result<PathBuf> {
    let path = timestamped_path(base, &report_timestamp());
    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create CSV output {}", path.display()))?;
    write_csv_to(results, file)?;
    Ok(path)
}

fn write_csv_to<W: Write>(results: &[DomainResult], writer: W) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    for result in results {
        writer
            .serialize(CsvRow::from(result))
            .with_context(|| format!("Failed to serialize CSV row for {}", result.domain))?;
    }
    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}
