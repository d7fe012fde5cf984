// Shared test helpers: fake DNS clients for deterministic engine tests.
//
// The engine talks to DNS through the `DnsClient` trait, so these fakes stand
// in for the network entirely; no test in this suite performs a real lookup.

use std::collections::HashMap;

use async_trait::async_trait;

use mail_audit::resolver::{DnsClient, Existence, TxtAnswer};

/// Map-backed fake resolver.
///
/// Unknown TXT names answer with an empty record set and unknown domains
/// count as existing, so tests only describe what differs from a healthy,
/// empty zone.
#[derive(Default, Clone)]
pub struct FakeDns {
    txt: HashMap<String, TxtAnswer>,
    existence: HashMap<String, Existence>,
}

#[allow(dead_code)] // Used across multiple test files
impl FakeDns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers TXT record strings at a name.
    pub fn with_txt(mut self, name: &str, records: &[&str]) -> Self {
        self.txt.insert(
            name.to_string(),
            TxtAnswer::Records(records.iter().map(ToString::to_string).collect()),
        );
        self
    }

    /// Registers a raw TXT answer (for NXDOMAIN/failure sentinels).
    pub fn with_txt_answer(mut self, name: &str, answer: TxtAnswer) -> Self {
        self.txt.insert(name.to_string(), answer);
        self
    }

    /// Overrides the apex existence probe for a domain.
    pub fn with_existence(mut self, domain: &str, existence: Existence) -> Self {
        self.existence.insert(domain.to_string(), existence);
        self
    }

    /// Registers a fully healthy domain: hard-fail SPF, reject DMARC, and a
    /// DKIM key at the `default` selector.
    pub fn with_healthy_domain(self, domain: &str) -> Self {
        self.with_txt(domain, &["v=spf1 -all"])
            .with_txt(&format!("_dmarc.{domain}"), &["v=DMARC1; p=reject;"])
            .with_txt(
                &format!("default._domainkey.{domain}"),
                &["v=DKIM1; k=rsa; p=MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQ"],
            )
    }

    /// Registers a domain whose apex answers NXDOMAIN everywhere.
    pub fn with_ghost_domain(self, domain: &str) -> Self {
        self.with_txt_answer(domain, TxtAnswer::NxDomain)
            .with_txt_answer(&format!("_dmarc.{domain}"), TxtAnswer::NxDomain)
            .with_existence(domain, Existence::NxDomain)
    }
}

#[async_trait]
impl DnsClient for FakeDns {
    async fn query_txt(&self, name: &str) -> TxtAnswer {
        self.txt
            .get(name)
            .cloned()
            .unwrap_or_else(|| TxtAnswer::Records(Vec::new()))
    }

    async fn domain_exists(&self, domain: &str) -> Existence {
        self.existence
            .get(domain)
            .copied()
            .unwrap_or(Existence::Exists)
    }
}

/// Fake resolver that panics on queries for one domain, to exercise the
/// orchestrator's per-domain panic isolation.
pub struct PanickingDns {
    pub inner: FakeDns,
    pub panic_on: String,
}

#[allow(dead_code)]
impl PanickingDns {
    pub fn new(inner: FakeDns, panic_on: &str) -> Self {
        Self {
            inner,
            panic_on: panic_on.to_string(),
        }
    }

    fn hits(&self, name: &str) -> bool {
        name == self.panic_on || name.ends_with(&format!(".{}", self.panic_on))
    }
}

#[async_trait]
impl DnsClient for PanickingDns {
    async fn query_txt(&self, name: &str) -> TxtAnswer {
        if self.hits(name) {
            panic!("injected evaluation failure for {name}");
        }
        self.inner.query_txt(name).await
    }

    async fn domain_exists(&self, domain: &str) -> Existence {
        if self.hits(domain) {
            panic!("injected evaluation failure for {domain}");
        }
        self.inner.domain_exists(domain).await
    }
}
