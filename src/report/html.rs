//! HTML report: summary analytics plus a searchable result table.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use super::{report_timestamp, timestamped_path};
use crate::models::{DomainResult, ScanSummary};

const STYLE: &str = "
body {
    background-color: #210A32;
    color: #E6D3F2;
    font-family: \"Consolas\", monospace;
    margin: 20px;
}
h1, h2 {
    text-align: center;
    color: #DABFFF;
}
.analytics, .timestamp {
    margin: 20px auto;
    max-width: 600px;
    background-color: #2A0C3F;
    padding: 15px;
    border-radius: 5px;
}
.search-box {
    text-align: center;
    margin: 20px;
}
input[type=\"text\"] {
    padding: 8px;
    font-size: 16px;
    width: 50%;
    border: 1px solid #9C6CD1;
    border-radius: 4px;
    background-color: #2F0B44;
    color: #E6D3F2;
}
table.results-table {
    width: 100%;
    border-collapse: collapse;
    margin: 20px 0;
}
table.results-table th, table.results-table td {
    border: 1px solid #9C6CD1;
    padding: 8px;
    text-align: left;
}
table.results-table th {
    background: #3C1053;
    color: #EEE;
}
table.results-table tr:nth-child(even) {
    background: #2F0B44;
}
";

const SEARCH_SCRIPT: &str = "
<script>
function searchTable() {
  var input = document.getElementById('searchInput');
  var filter = input.value.toUpperCase();
  var table = document.getElementById('resultsTable');
  var rows = table.getElementsByTagName('tr');
  for (var i = 1; i < rows.length; i++) {
    rows[i].style.display = 'none';
    var cells = rows[i].getElementsByTagName('td');
    for (var j = 0; j < cells.length; j++) {
      var text = cells[j].textContent || cells[j].innerText;
      if (text.toUpperCase().indexOf(filter) > -1) {
        rows[i].style.display = '';
        break;
      }
    }
  }
}
</script>
";

/// Renders the full HTML report as a string.
pub fn render_html(results: &[DomainResult], summary: &ScanSummary) -> String {
    let mut rows = String::new();
    for result in results {
        let status = |well_formed: bool| if well_formed { "Pass" } else { "Fail" };
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&result.domain),
            status(result.spf.well_formed),
            status(result.dkim.well_formed),
            status(result.dmarc.well_formed),
            if result.spoofing_vulnerable { "Yes" } else { "No" },
            if result.takeover_risk { "Yes" } else { "No" },
            if result.evaluation_error { "Yes" } else { "No" },
        ));
    }

    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Email Authentication Audit Report</title>
    <style>{STYLE}</style>
</head>
<body>

<h1>Email Authentication Audit Report</h1>

<div class="analytics">
  <h2>Analytics Summary</h2>
  <ul>
    <li><strong>Total Domains Scanned:</strong> {total}</li>
    <li><strong>Vulnerable to Spoofing:</strong> {vulnerable}</li>
    <li><strong>Potential Subdomain Takeovers:</strong> {takeover}</li>
    <li><strong>Evaluation Errors:</strong> {errors}</li>
    <li><strong>Scan Duration (seconds):</strong> {duration:.2}</li>
  </ul>
</div>

<div class="search-box">
    <input type="text" id="searchInput" onkeyup="searchTable()" placeholder="Search by any column...">
</div>

<table class="results-table" id="resultsTable">
<tr><th>Domain</th><th>SPF</th><th>DKIM</th><th>DMARC</th><th>Vulnerable to Spoofing</th><th>Potential Subdomain Takeover</th><th>Evaluation Error</th></tr>
{rows}</table>

<div class="timestamp">
  <h2>Report generated at: {generated_at}</h2>
</div>
{SEARCH_SCRIPT}
</body>
</html>
"#,
        total = summary.total_domains,
        vulnerable = summary.vulnerable,
        takeover = summary.takeover_risk,
        errors = summary.evaluation_errors,
        duration = summary.elapsed_seconds,
    )
}

/// Writes the HTML report to a timestamped file and returns the path.
///
/// # Errors
///
/// Returns an error if the output file cannot be written.
pub fn write_html(
    results: &[DomainResult],
    summary: &ScanSummary,
    base: &Path,
) -> Result<PathBuf> {
    let path = timestamped_path(base, &report_timestamp());
    std::fs::write(&path, render_html(results, summary))
        .with_context(|| format!("Failed to write HTML output {}", path.display()))?;
    Ok(path)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
