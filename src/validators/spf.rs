//! SPF record validation.

use crate::models::ProtocolVerdict;
use crate::resolver::TxtAnswer;

/// Evaluates the SPF verdict for a domain's own TXT records.
///
/// A record is an SPF candidate if it contains `v=spf1` (matching is
/// case-insensitive). A candidate is well-formed if it also carries an `all`
/// mechanism token: `-all`, `~all`, `?all`, or bare `all`. The token must be
/// whitespace-delimited, so `include:allmail.example` does not count.
///
/// Multiple SPF records at one domain are a misconfiguration, but one
/// well-formed candidate is all this check requires; the reported record is
/// the first well-formed candidate, or the first candidate when none is
/// well-formed. Failure and NXDOMAIN answers yield an absent verdict.
pub fn evaluate_spf(answer: &TxtAnswer) -> ProtocolVerdict {
    let records = match answer {
        TxtAnswer::Records(records) => records,
        TxtAnswer::NxDomain | TxtAnswer::Failed => return ProtocolVerdict::absent(),
    };

    let candidates: Vec<&str> = records
        .iter()
        .map(String::as_str)
        .filter(|record| record.to_lowercase().contains("v=spf1"))
        .collect();
    let Some(&first) = candidates.first() else {
        return ProtocolVerdict::absent();
    };

    let well_formed = candidates.iter().copied().find(|r| has_all_mechanism(r));
    ProtocolVerdict {
        found: true,
        well_formed: well_formed.is_some(),
        policy: None,
        raw_record: Some(well_formed.unwrap_or(first).to_string()),
    }
}

fn has_all_mechanism(record: &str) -> bool {
    record
        .to_lowercase()
        .split_whitespace()
        .any(|token| matches!(token, "all" | "-all" | "~all" | "?all"))
}
