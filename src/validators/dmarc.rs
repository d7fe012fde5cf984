//! DMARC record validation.

use crate::models::ProtocolVerdict;
use crate::resolver::TxtAnswer;

/// Evaluates the DMARC verdict for the TXT records at `_dmarc.<domain>`.
///
/// A record is a DMARC candidate if it starts with `v=DMARC1` (matching is
/// case-insensitive). A candidate is well-formed if it carries a `p=` tag
/// whose value is `none`, `quarantine`, or `reject`; that value becomes the
/// verdict's `policy`. When the `p=` tag is duplicated, the first one wins,
/// even if its value is unrecognized.
pub fn evaluate_dmarc(answer: &TxtAnswer) -> ProtocolVerdict {
    let records = match answer {
        TxtAnswer::Records(records) => records,
        TxtAnswer::NxDomain | TxtAnswer::Failed => return ProtocolVerdict::absent(),
    };

    let candidates: Vec<&str> = records
        .iter()
        .map(String::as_str)
        .filter(|record| record.trim().to_lowercase().starts_with("v=dmarc1"))
        .collect();
    let Some(&first) = candidates.first() else {
        return ProtocolVerdict::absent();
    };

    for candidate in &candidates {
        if let Some(policy) = parse_policy(candidate) {
            return ProtocolVerdict {
                found: true,
                well_formed: true,
                policy: Some(policy),
                raw_record: Some((*candidate).to_string()),
            };
        }
    }

    ProtocolVerdict {
        found: true,
        well_formed: false,
        policy: None,
        raw_record: Some(first.to_string()),
    }
}

/// Extracts the `p=` policy value if it is one of the three valid policies.
fn parse_policy(record: &str) -> Option<String> {
    for tag in record.split(';') {
        let Some((key, value)) = tag.split_once('=') else {
            continue;
        };
        if key.trim().eq_ignore_ascii_case("p") {
            let value = value.trim().to_lowercase();
            if matches!(value.as_str(), "none" | "quarantine" | "reject") {
                return Some(value);
            }
            // First p= tag wins; an unrecognized value is not well-formed
            return None;
        }
    }
    None
}
