//! DNS resolver client for the evaluation engine.
//!
//! The engine talks to DNS through the [`DnsClient`] trait so tests can swap
//! in a fake resolver; [`HickoryClient`] is the production implementation on
//! top of `hickory-resolver`. Lookups never propagate errors upward: a
//! timeout or network failure surfaces as a sentinel that callers treat as
//! "unknown", which is distinct from a confirmed-absent record.

mod client;

pub use client::HickoryClient;

use async_trait::async_trait;

/// Outcome of one TXT query.
///
/// Transient: produced and consumed within a single domain evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxtAnswer {
    /// The query succeeded; zero or more TXT strings, multi-part strings
    /// already joined.
    Records(Vec<String>),
    /// The queried name does not exist.
    NxDomain,
    /// The query timed out or failed; the record state is unknown.
    Failed,
}

/// Outcome of the apex existence probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Existence {
    /// The domain resolves (it may still lack address records).
    Exists,
    /// The domain itself is NXDOMAIN: the takeover-risk signal.
    NxDomain,
    /// The probe timed out or failed; existence is unknown.
    Unknown,
}

/// Uniform query interface the engine uses for all DNS access.
///
/// Each call is independent and bounded by the configured timeout; there is
/// no caching, so repeated selectors or repeated domains re-query.
#[async_trait]
pub trait DnsClient: Send + Sync {
    /// Resolves the TXT records at `name`.
    async fn query_txt(&self, name: &str) -> TxtAnswer;

    /// Probes whether `domain` exists at all (A/AAAA lookup at the apex).
    async fn domain_exists(&self, domain: &str) -> Existence;
}
