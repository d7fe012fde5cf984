//! Production DNS client on top of `hickory-resolver`.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;

use super::{DnsClient, Existence, TxtAnswer};
use crate::error_handling::InitializationError;

/// Default DNS port used when `--nameserver` gives a bare IP.
const DNS_PORT: u16 = 53;

/// DNS client backed by a `TokioAsyncResolver`.
///
/// Queries go to the configured nameserver, or to the resolver defaults when
/// none is given. Every lookup is bounded by the configured timeout with a
/// single attempt, so a stalled query cannot exceed that bound.
pub struct HickoryClient {
    resolver: TokioAsyncResolver,
}

impl HickoryClient {
    /// Creates a client for the given nameserver (`ip` or `ip:port`) and
    /// per-query timeout.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError::InvalidNameserver`] if the nameserver
    /// string parses as neither a socket address nor an IP address.
    pub fn new(nameserver: Option<&str>, timeout: Duration) -> Result<Self, InitializationError> {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = 1;

        let resolver = match nameserver {
            Some(address) => {
                let socket_addr = parse_nameserver(address)?;
                let mut config = ResolverConfig::new();
                let mut name_server = NameServerConfig::new(socket_addr, Protocol::Udp);
                name_server.trust_negative_responses = true;
                config.add_name_server(name_server);
                TokioAsyncResolver::tokio(config, opts)
            }
            None => TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
        };

        Ok(Self { resolver })
    }
}

#[async_trait]
impl DnsClient for HickoryClient {
    async fn query_txt(&self, name: &str) -> TxtAnswer {
        match self.resolver.txt_lookup(name).await {
            Ok(lookup) => {
                let records: Vec<String> = lookup
                    .iter()
                    .filter_map(|txt| {
                        // TXT records can be split across multiple byte
                        // slices; join them into one string per record
                        let parts: Result<Vec<String>, _> = txt
                            .txt_data()
                            .iter()
                            .map(|bytes| String::from_utf8(bytes.to_vec()))
                            .collect();
                        parts.ok().map(|parts| parts.join(""))
                    })
                    .collect();
                TxtAnswer::Records(records)
            }
            Err(e) => classify_txt_failure(&e, name),
        }
    }

    async fn domain_exists(&self, domain: &str) -> Existence {
        match self.resolver.lookup_ip(domain).await {
            Ok(_) => Existence::Exists,
            Err(e) => match e.kind() {
                ResolveErrorKind::NoRecordsFound { response_code, .. }
                    if *response_code == ResponseCode::NXDomain =>
                {
                    Existence::NxDomain
                }
                // The name exists but has no address records
                ResolveErrorKind::NoRecordsFound { .. } => Existence::Exists,
                _ => {
                    log::warn!("Existence probe failed for {domain}: {e}");
                    Existence::Unknown
                }
            },
        }
    }
}

/// Maps a TXT lookup error to the engine's sentinel answers.
///
/// "No records found" is an ordinary outcome, not a failure: NXDOMAIN gets
/// its own sentinel, an empty record set otherwise. Timeouts and transport
/// errors become [`TxtAnswer::Failed`].
fn classify_txt_failure(error: &ResolveError, name: &str) -> TxtAnswer {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            TxtAnswer::NxDomain
        }
        ResolveErrorKind::NoRecordsFound { .. } => TxtAnswer::Records(Vec::new()),
        ResolveErrorKind::Timeout => {
            log::warn!("TXT lookup timed out for {name}");
            TxtAnswer::Failed
        }
        _ => {
            log::warn!("TXT lookup failed for {name}: {error}");
            TxtAnswer::Failed
        }
    }
}

fn parse_nameserver(address: &str) -> Result<SocketAddr, InitializationError> {
    if let Ok(socket_addr) = address.parse::<SocketAddr>() {
        return Ok(socket_addr);
    }
    address
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DNS_PORT))
        .map_err(|_| InitializationError::InvalidNameserver(address.to_string()))
}
