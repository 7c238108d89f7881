//! Subscriber bootstrap for the events emitted across the workspace.
//!
//! The library crates only emit `tracing` events; applications and tests that
//! want to see them call [`init`] once at startup.

use crate::constants::{DEFAULT_LOG_FILTER, FALLBACK_LOG_ENV_VAR, LOG_ENV_VAR};
use crate::errors::{Error, Result};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber filtered by `UNDERBAR_LOG`.
///
/// Falls back to `RUST_LOG`, then to `warn`. Returns an error instead of
/// panicking when a global subscriber is already installed.
pub fn init() -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(true)
        .with_level(true);

    let filter = filter();
    let directives = filter.to_string();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    debug!(filter = %directives, "logging initialized");
    Ok(())
}

/// Build the filter from the environment
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_env(FALLBACK_LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_error() {
        let first = init();
        let second = init();

        // Another test binary may already own the global subscriber.
        assert!(first.is_ok() || matches!(first, Err(Error::Logging { .. })));
        assert!(matches!(second, Err(Error::Logging { .. })));
    }
}
