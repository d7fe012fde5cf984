//! Per-protocol record validators.
//!
//! Each validator is a pure function from a resolved [`TxtAnswer`] to a
//! [`ProtocolVerdict`], so the three protocols stay independently testable.
//! These are shape checks on the raw record text, not semantic evaluation:
//! SPF mechanisms are not expanded, DKIM keys are not verified, and DMARC
//! tags beyond `p=` are ignored.
//!
//! [`TxtAnswer`]: crate::resolver::TxtAnswer
//! [`ProtocolVerdict`]: crate::models::ProtocolVerdict

mod dkim;
mod dmarc;
mod spf;

pub use dkim::{aggregate_dkim, evaluate_dkim_selector};
pub use dmarc::evaluate_dmarc;
pub use spf::evaluate_spf;
