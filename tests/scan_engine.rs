//! Orchestrator behavior: isolation, ordering, and degraded results.

mod helpers;

use std::sync::Arc;

use helpers::{FakeDns, PanickingDns};
use mail_audit::error_handling::{ErrorStats, ErrorType};
use mail_audit::resolver::TxtAnswer;
use mail_audit::{scan_domains, Config};

fn engine_config() -> Config {
    Config {
        threads: 4,
        dkim_selectors: vec!["default".to_string()],
        ..Config::default()
    }
}

#[tokio::test]
async fn test_one_failing_domain_leaves_the_rest_untouched() {
    // Ten healthy domains, one of which times out on every lookup
    let mut dns = FakeDns::new();
    let domains: Vec<String> = (0..10).map(|i| format!("domain{i}.example")).collect();
    for domain in &domains {
        dns = dns.with_healthy_domain(domain);
    }
    let dns = dns
        .with_txt_answer("domain4.example", TxtAnswer::Failed)
        .with_txt_answer("_dmarc.domain4.example", TxtAnswer::Failed)
        .with_txt_answer("default._domainkey.domain4.example", TxtAnswer::Failed);

    let outcome = scan_domains(
        domains.clone(),
        &engine_config(),
        Arc::new(dns),
        Arc::new(ErrorStats::new()),
    )
    .await;

    assert_eq!(outcome.results.len(), 10);
    for (i, result) in outcome.results.iter().enumerate() {
        assert_eq!(result.domain, domains[i]);
        if i == 4 {
            assert!(!result.spf.found);
            assert!(!result.dmarc.found);
            assert!(result.spoofing_vulnerable);
        } else {
            assert!(result.spf.well_formed, "{} should be unaffected", result.domain);
            assert!(result.dmarc.well_formed);
            assert!(!result.spoofing_vulnerable);
        }
    }
    assert_eq!(outcome.summary.vulnerable, 1);
}

#[tokio::test]
async fn test_panicking_domain_becomes_a_degraded_result() {
    let inner = FakeDns::new()
        .with_healthy_domain("first.example")
        .with_healthy_domain("third.example");
    let dns = PanickingDns::new(inner, "second.example");
    let stats = Arc::new(ErrorStats::new());

    let domains = vec![
        "first.example".to_string(),
        "second.example".to_string(),
        "third.example".to_string(),
    ];
    let outcome = scan_domains(domains, &engine_config(), Arc::new(dns), Arc::clone(&stats)).await;

    assert_eq!(outcome.results.len(), 3);
    let degraded = &outcome.results[1];
    assert_eq!(degraded.domain, "second.example");
    assert!(degraded.evaluation_error);
    assert!(degraded.spoofing_vulnerable);
    assert!(!degraded.spf.found);

    assert!(!outcome.results[0].evaluation_error);
    assert!(!outcome.results[0].spoofing_vulnerable);
    assert!(!outcome.results[2].evaluation_error);
    assert!(!outcome.results[2].spoofing_vulnerable);

    assert_eq!(stats.count(ErrorType::DomainTaskPanic), 1);
    assert_eq!(outcome.summary.evaluation_errors, 1);
}

#[tokio::test]
async fn test_results_come_back_in_input_order() {
    let mut dns = FakeDns::new();
    let domains: Vec<String> = (0..100).map(|i| format!("d{i}.example")).collect();
    for domain in &domains {
        dns = dns.with_healthy_domain(domain);
    }

    let outcome = scan_domains(
        domains.clone(),
        &engine_config(),
        Arc::new(dns),
        Arc::new(ErrorStats::new()),
    )
    .await;

    let returned: Vec<&str> = outcome.results.iter().map(|r| r.domain.as_str()).collect();
    let expected: Vec<&str> = domains.iter().map(String::as_str).collect();
    assert_eq!(returned, expected);
}

#[tokio::test]
async fn test_empty_domain_list() {
    let outcome = scan_domains(
        Vec::new(),
        &engine_config(),
        Arc::new(FakeDns::new()),
        Arc::new(ErrorStats::new()),
    )
    .await;
    assert!(outcome.results.is_empty());
    assert_eq!(outcome.summary.total_domains, 0);
    assert_eq!(outcome.summary.vulnerable, 0);
}

#[tokio::test]
async fn test_per_domain_elapsed_time_is_recorded() {
    let dns = FakeDns::new().with_healthy_domain("timed.example");
    let outcome = scan_domains(
        vec!["timed.example".to_string()],
        &engine_config(),
        Arc::new(dns),
        Arc::new(ErrorStats::new()),
    )
    .await;
    assert!(outcome.results[0].elapsed_seconds >= 0.0);
    assert!(outcome.summary.elapsed_seconds >= outcome.results[0].elapsed_seconds);
}
