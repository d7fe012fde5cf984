//! Risk classification over the per-protocol verdicts.

use crate::models::ProtocolVerdict;

/// The two risk flags the engine assigns to a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskFlags {
    /// SPF or DMARC is missing or malformed.
    pub spoofing_vulnerable: bool,
    /// The domain apex is NXDOMAIN: a dangling reference an attacker could
    /// claim.
    pub takeover_risk: bool,
}

/// Classifies a domain's exposure from its verdicts and NXDOMAIN status.
///
/// Pure and total: absent or malformed data arrives as `well_formed = false`
/// and flows straight into the vulnerability flag. A domain is spoofable
/// unless both SPF and DMARC are well-formed. DKIM strengthens a domain's
/// posture but is not required by this threat model, so its verdict never
/// affects the flags.
pub fn classify(
    spf: &ProtocolVerdict,
    dmarc: &ProtocolVerdict,
    _dkim: &ProtocolVerdict,
    nxdomain: bool,
) -> RiskFlags {
    RiskFlags {
        spoofing_vulnerable: !spf.well_formed || !dmarc.well_formed,
        takeover_risk: nxdomain,
    }
}
