//! Report sink tests: CSV and HTML files written from a finished scan.

mod helpers;

use std::sync::Arc;

use helpers::FakeDns;
use mail_audit::error_handling::ErrorStats;
use mail_audit::report::{write_csv, write_html};
use mail_audit::{scan_domains, Config, ScanOutcome};

async fn small_scan() -> ScanOutcome {
    let dns = FakeDns::new()
        .with_healthy_domain("good.com")
        .with_txt("bad.com", &["v=spf1 include:_spf.bad.com"]);
    let config = Config {
        threads: 2,
        dkim_selectors: vec!["default".to_string()],
        ..Config::default()
    };
    scan_domains(
        vec!["good.com".to_string(), "bad.com".to_string()],
        &config,
        Arc::new(dns),
        Arc::new(ErrorStats::new()),
    )
    .await
}

#[tokio::test]
async fn test_csv_report_round_trip() {
    let outcome = small_scan().await;
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let base = dir.path().join("results.csv");

    let written = write_csv(&outcome.results, &base).expect("CSV write failed");
    let name = written.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("results_"));
    assert!(name.ends_with(".csv"));

    let contents = std::fs::read_to_string(&written).unwrap();
    let mut lines = contents.lines();
    let header = lines.next().unwrap();
    assert!(header.contains("domain"));
    assert!(header.contains("spoofing_vulnerable"));
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("good.com,"));
    assert!(rows[1].starts_with("bad.com,"));
    assert!(rows[1].contains("true")); // bad.com is flagged vulnerable
}

#[tokio::test]
async fn test_html_report_is_written_with_timestamped_name() {
    let outcome = small_scan().await;
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let base = dir.path().join("report.html");

    let written =
        write_html(&outcome.results, &outcome.summary, &base).expect("HTML write failed");
    let name = written.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("report_"));
    assert!(name.ends_with(".html"));

    let contents = std::fs::read_to_string(&written).unwrap();
    assert!(contents.contains("good.com"));
    assert!(contents.contains("bad.com"));
    assert!(contents.contains("<strong>Total Domains Scanned:</strong> 2"));
    assert!(contents.contains("<strong>Vulnerable to Spoofing:</strong> 1"));
}
