//! Scan orchestration: bounded fan-out across domains and result collection.
//!
//! Each domain runs its full pipeline (resolve SPF, DMARC, and the DKIM
//! selectors, then classify) inside its own spawned task. Concurrency is
//! bounded by a semaphore; tasks complete in any order, but each writes its
//! result into a per-domain slot keyed by input position, so the returned
//! sequence always matches the input sequence.
//! A panic inside one domain's task is caught at the join boundary and
//! converted into a degraded result, never aborting the batch.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::classify::classify;
use crate::config::{Config, PROGRESS_LOG_EVERY};
use crate::error_handling::{ErrorStats, ErrorType};
use crate::initialization::{init_resolver, init_semaphore};
use crate::models::{DomainResult, ScanSummary};
use crate::resolver::{DnsClient, Existence, TxtAnswer};
use crate::validators::{aggregate_dkim, evaluate_dkim_selector, evaluate_dmarc, evaluate_spf};

/// Everything a finished scan hands to the report sink.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// One result per input domain, in input order.
    pub results: Vec<DomainResult>,
    /// Aggregate statistics over `results`.
    pub summary: ScanSummary,
}

/// Runs a full scan from the configured input file.
///
/// Reads the domain list (one per line, trimmed; blank lines and `#`
/// comments skipped), builds the production resolver, evaluates every
/// domain, and logs the failure statistics at the end.
///
/// # Errors
///
/// Returns an error if the input file cannot be read or the nameserver
/// address is invalid. Per-domain failures never surface here; they degrade
/// the affected domain's verdicts instead.
pub async fn run_scan(config: &Config) -> Result<ScanOutcome> {
    let domains = read_domains(&config.input_file).await?;
    info!("Total domains in file: {}", domains.len());

    let client: Arc<dyn DnsClient> = init_resolver(config)?;
    let error_stats = Arc::new(ErrorStats::new());
    let outcome = scan_domains(domains, config, client, Arc::clone(&error_stats)).await;
    error_stats.log_nonzero();
    Ok(outcome)
}

/// Reads the domain list from a text file.
///
/// One domain per line; surrounding whitespace is trimmed, blank lines and
/// lines starting with `#` are skipped.
pub async fn read_domains(path: &Path) -> Result<Vec<String>> {
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();
    let mut domains = Vec::new();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        domains.push(trimmed.to_string());
    }
    Ok(domains)
}

/// Evaluates every domain through the given DNS client.
///
/// The core engine entry point: takes an ordered domain list and returns one
/// result per domain in the same order, plus the scan summary. Domains are
/// fully independent; the only state shared between tasks is the read-only
/// configuration and the failure counters.
pub async fn scan_domains(
    domains: Vec<String>,
    config: &Config,
    client: Arc<dyn DnsClient>,
    error_stats: Arc<ErrorStats>,
) -> ScanOutcome {
    let start = Instant::now();
    let total = domains.len();
    let semaphore = init_semaphore(config.threads.max(1));
    let selectors: Arc<[String]> = config.dkim_selectors.clone().into();

    let mut handles = Vec::with_capacity(total);
    for domain in domains {
        // None only if the semaphore were closed, which nothing here does;
        // the task then just runs unthrottled rather than losing the domain
        let permit = Arc::clone(&semaphore).acquire_owned().await.ok();
        let client = Arc::clone(&client);
        let stats = Arc::clone(&error_stats);
        let selectors = Arc::clone(&selectors);
        let task_domain = domain.clone();
        let handle = tokio::spawn(async move {
            let _permit = permit;
            evaluate_domain(&task_domain, &selectors, client.as_ref(), stats.as_ref()).await
        });
        handles.push((domain, handle));
    }

    // One slot per domain, written exactly once; tasks finish in any order
    // but the slot index restores input order
    let mut pending: FuturesUnordered<_> = handles
        .into_iter()
        .enumerate()
        .map(|(index, (domain, handle))| async move { (index, domain, handle.await) })
        .collect();

    let mut slots: Vec<Option<DomainResult>> = (0..total).map(|_| None).collect();
    let mut completed = 0usize;
    while let Some((index, domain, joined)) = pending.next().await {
        let result = match joined {
            Ok(result) => result,
            Err(join_error) => {
                warn!("Evaluation task for {domain} panicked: {join_error:?}");
                error_stats.increment(ErrorType::DomainTaskPanic);
                DomainResult::degraded(domain, 0.0)
            }
        };
        slots[index] = Some(result);

        completed += 1;
        if completed % PROGRESS_LOG_EVERY == 0 || completed == total {
            log_progress(start, completed, total);
        }
    }
    let results: Vec<DomainResult> = slots.into_iter().flatten().collect();

    let elapsed_seconds = start.elapsed().as_secs_f64();
    let summary = ScanSummary::from_results(&results, elapsed_seconds);
    ScanOutcome { results, summary }
}

/// Runs one domain's full evaluation pipeline.
///
/// The apex TXT lookup, the `_dmarc` TXT lookup, and the existence probe run
/// concurrently; DKIM selectors are then probed in list order, stopping
/// early once a well-formed selector is seen. Lookup failures degrade the
/// affected verdict to not-found and bump the matching failure counter.
pub async fn evaluate_domain(
    domain: &str,
    selectors: &[String],
    client: &dyn DnsClient,
    stats: &ErrorStats,
) -> DomainResult {
    let start = Instant::now();

    let dmarc_name = format!("_dmarc.{domain}");
    let (apex_txt, dmarc_txt, existence) = tokio::join!(
        client.query_txt(domain),
        client.query_txt(&dmarc_name),
        client.domain_exists(domain),
    );
    if apex_txt == TxtAnswer::Failed {
        stats.increment(ErrorType::SpfLookupFailure);
    }
    if dmarc_txt == TxtAnswer::Failed {
        stats.increment(ErrorType::DmarcLookupFailure);
    }
    if existence == Existence::Unknown {
        stats.increment(ErrorType::ExistenceProbeFailure);
    }

    let spf = evaluate_spf(&apex_txt);
    let dmarc = evaluate_dmarc(&dmarc_txt);

    let mut per_selector = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let name = format!("{selector}._domainkey.{domain}");
        let answer = client.query_txt(&name).await;
        if answer == TxtAnswer::Failed {
            stats.increment(ErrorType::DkimLookupFailure);
        }
        let verdict = evaluate_dkim_selector(&answer);
        let settled = verdict.well_formed;
        per_selector.push((selector.clone(), verdict));
        if settled {
            // A well-formed selector settles the domain verdict
            break;
        }
    }
    let (dkim, dkim_selector) = aggregate_dkim(&per_selector);

    let nxdomain = existence == Existence::NxDomain;
    let flags = classify(&spf, &dmarc, &dkim, nxdomain);

    DomainResult {
        domain: domain.to_string(),
        spf,
        dkim,
        dmarc,
        dkim_selector,
        nxdomain,
        spoofing_vulnerable: flags.spoofing_vulnerable,
        takeover_risk: flags.takeover_risk,
        evaluation_error: false,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    }
}

fn log_progress(start: Instant, completed: usize, total: usize) {
    let elapsed_secs = start.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Evaluated {completed}/{total} domains in {elapsed_secs:.2} seconds (~{rate:.2} domains/sec)"
    );
}
