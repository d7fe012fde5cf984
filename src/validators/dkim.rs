//! DKIM record validation and per-selector aggregation.

use crate::models::ProtocolVerdict;
use crate::resolver::TxtAnswer;

/// Evaluates the DKIM verdict for one selector's TXT records, queried at
/// `<selector>._domainkey.<domain>`.
///
/// A record is a DKIM candidate if it contains `v=DKIM1` (matching is
/// case-insensitive). A candidate is well-formed if it carries a non-empty
/// `p=` tag, the public-key material; an empty `p=` denotes a revoked key.
pub fn evaluate_dkim_selector(answer: &TxtAnswer) -> ProtocolVerdict {
    let records = match answer {
        TxtAnswer::Records(records) => records,
        TxtAnswer::NxDomain | TxtAnswer::Failed => return ProtocolVerdict::absent(),
    };

    let candidates: Vec<&str> = records
        .iter()
        .map(String::as_str)
        .filter(|record| record.to_lowercase().contains("v=dkim1"))
        .collect();
    let Some(&first) = candidates.first() else {
        return ProtocolVerdict::absent();
    };

    let well_formed = candidates.iter().copied().find(|r| has_public_key(r));
    ProtocolVerdict {
        found: true,
        well_formed: well_formed.is_some(),
        policy: None,
        raw_record: Some(well_formed.unwrap_or(first).to_string()),
    }
}

/// Folds per-selector verdicts into the domain-level DKIM verdict.
///
/// The domain counts as `found` when any selector found a candidate.
/// Selection policy: the reported verdict is the first well-formed selector
/// in selector-list order, falling back to the first found selector. Returns
/// the verdict together with the selector it came from.
pub fn aggregate_dkim(per_selector: &[(String, ProtocolVerdict)]) -> (ProtocolVerdict, Option<String>) {
    if let Some((selector, verdict)) = per_selector.iter().find(|(_, v)| v.well_formed) {
        return (verdict.clone(), Some(selector.clone()));
    }
    if let Some((selector, verdict)) = per_selector.iter().find(|(_, v)| v.found) {
        return (verdict.clone(), Some(selector.clone()));
    }
    (ProtocolVerdict::absent(), None)
}

fn has_public_key(record: &str) -> bool {
    record.split(';').any(|tag| {
        tag.split_once('=')
            .is_some_and(|(key, value)| key.trim().eq_ignore_ascii_case("p") && !value.trim().is_empty())
    })
}
