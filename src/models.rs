//! Result data types produced by the evaluation engine.

use serde::Serialize;

/// Shape verdict for one protocol's DNS record.
///
/// Produced by the validators in [`crate::validators`]. `well_formed` implies
/// `found`; `policy` is only set for DMARC, where it carries the parsed `p=`
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProtocolVerdict {
    /// A candidate record for the protocol exists.
    pub found: bool,
    /// The candidate record passes the protocol's shape check.
    pub well_formed: bool,
    /// DMARC only: the parsed `p=` policy (`none`, `quarantine`, or `reject`).
    pub policy: Option<String>,
    /// The raw text of the record the verdict was made on.
    pub raw_record: Option<String>,
}

impl ProtocolVerdict {
    /// Verdict for a protocol with no candidate record at all.
    pub fn absent() -> Self {
        Self::default()
    }
}

/// The engine's output for a single domain.
///
/// Built exactly once per domain by the scan orchestrator after all
/// sub-checks complete, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainResult {
    /// The domain that was evaluated.
    pub domain: String,
    /// SPF verdict for the domain's own TXT records.
    pub spf: ProtocolVerdict,
    /// DKIM verdict aggregated across the configured selectors.
    pub dkim: ProtocolVerdict,
    /// DMARC verdict for `_dmarc.<domain>`.
    pub dmarc: ProtocolVerdict,
    /// Which selector the aggregated DKIM verdict came from, if any.
    pub dkim_selector: Option<String>,
    /// The domain apex resolved to NXDOMAIN.
    pub nxdomain: bool,
    /// SPF or DMARC is missing or malformed, so the domain can be spoofed.
    pub spoofing_vulnerable: bool,
    /// The apex NXDOMAIN suggests a dangling reference an attacker could claim.
    pub takeover_risk: bool,
    /// Evaluation failed unexpectedly and the verdicts are degraded defaults.
    pub evaluation_error: bool,
    /// Wall time spent evaluating this domain.
    pub elapsed_seconds: f64,
}

impl DomainResult {
    /// A degraded result for a domain whose evaluation failed outright.
    ///
    /// All verdicts default to not-found, which classifies the domain as
    /// vulnerable to spoofing: the safe default for an unevaluable domain.
    pub fn degraded(domain: impl Into<String>, elapsed_seconds: f64) -> Self {
        Self {
            domain: domain.into(),
            spf: ProtocolVerdict::absent(),
            dkim: ProtocolVerdict::absent(),
            dmarc: ProtocolVerdict::absent(),
            dkim_selector: None,
            nxdomain: false,
            spoofing_vulnerable: true,
            takeover_risk: false,
            evaluation_error: true,
            elapsed_seconds,
        }
    }
}

/// Aggregate statistics over one scan's results.
///
/// Derived from the result collection via [`ScanSummary::from_results`];
/// never mutated independently of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanSummary {
    /// Total number of domains evaluated.
    pub total_domains: usize,
    /// Domains flagged vulnerable to spoofing.
    pub vulnerable: usize,
    /// Domains flagged as potential subdomain takeovers.
    pub takeover_risk: usize,
    /// Domains whose evaluation failed and produced a degraded result.
    pub evaluation_errors: usize,
    /// Wall time for the whole scan.
    pub elapsed_seconds: f64,
}

impl ScanSummary {
    /// Computes the summary for a finished result collection.
    pub fn from_results(results: &[DomainResult], elapsed_seconds: f64) -> Self {
        Self {
            total_domains: results.len(),
            vulnerable: results.iter().filter(|r| r.spoofing_vulnerable).count(),
            takeover_risk: results.iter().filter(|r| r.takeover_risk).count(),
            evaluation_errors: results.iter().filter(|r| r.evaluation_error).count(),
            elapsed_seconds,
        }
    }
}
