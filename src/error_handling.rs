//! Error taxonomy and per-category failure counters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::SetLoggerError;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The `--nameserver` value could not be parsed.
    #[error("Invalid nameserver address '{0}' (expected ip or ip:port)")]
    InvalidNameserver(String),
}

/// Recoverable failure categories seen while evaluating domains.
///
/// These never abort a scan; they degrade the affected verdict to
/// not-found and are tallied for the end-of-run report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// TXT lookup for SPF timed out or failed.
    SpfLookupFailure,
    /// TXT lookup at `_dmarc.<domain>` timed out or failed.
    DmarcLookupFailure,
    /// TXT lookup at a DKIM selector timed out or failed.
    DkimLookupFailure,
    /// The apex existence probe timed out or failed.
    ExistenceProbeFailure,
    /// A per-domain evaluation task panicked.
    DomainTaskPanic,
}

impl ErrorType {
    /// Human-readable label for the end-of-run statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::SpfLookupFailure => "SPF lookup failure",
            ErrorType::DmarcLookupFailure => "DMARC lookup failure",
            ErrorType::DkimLookupFailure => "DKIM lookup failure",
            ErrorType::ExistenceProbeFailure => "Existence probe failure",
            ErrorType::DomainTaskPanic => "Domain task panic",
        }
    }
}

/// Thread-safe failure counters, one per [`ErrorType`].
///
/// Shared across evaluation tasks via `Arc`; all counters start at zero.
pub struct ErrorStats {
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ErrorStats {
    /// Creates a tracker with every category initialized to zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }
        ErrorStats { errors }
    }

    /// Bumps the counter for one category.
    pub fn increment(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Current count for one category.
    pub fn count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map_or(0, |counter| counter.load(Ordering::SeqCst))
    }

    /// Logs every category with a non-zero count.
    pub fn log_nonzero(&self) {
        for error in ErrorType::iter() {
            let count = self.count(error);
            if count > 0 {
                log::info!("{}: {}", error.as_str(), count);
            }
        }
    }
}

impl Default for ErrorStats {
    fn default() -> Self {
        Self::new()
    }
}
