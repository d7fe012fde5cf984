//! Constructors for the logger, resolver client, and concurrency limiter.

use std::sync::Arc;

use log::LevelFilter;
use tokio::sync::Semaphore;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::resolver::HickoryClient;

/// Initializes the global logger at the given level.
///
/// `RUST_LOG` still takes precedence when set, so individual modules can be
/// tuned without touching the CLI flag.
pub fn init_logger(level: LevelFilter) -> Result<(), InitializationError> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .try_init()?;
    Ok(())
}

/// Creates the semaphore bounding concurrent domain evaluations.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}

/// Builds the production DNS client from the scan configuration.
pub fn init_resolver(config: &Config) -> Result<Arc<HickoryClient>, InitializationError> {
    let client = HickoryClient::new(config.nameserver.as_deref(), config.dns_timeout())?;
    Ok(Arc::new(client))
}
