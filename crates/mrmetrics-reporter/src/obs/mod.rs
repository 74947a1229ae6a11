//! Logging setup for hosts embedding the reporter.
//!
//! The reporter itself only emits `tracing` events; installing a subscriber
//! is left to the outermost binary or test harness.

use tracing_subscriber::{fmt, EnvFilter};

use mrmetrics_core::{MetricsError, Result};

/// Install a global fmt subscriber. `RUST_LOG` overrides `default_directive`.
///
/// Fails instead of panicking when a global subscriber is already set.
pub fn init_tracing(default_directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| MetricsError::BadRequest(format!("invalid log filter: {e}")))?;

    fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| MetricsError::Internal(format!("tracing init failed: {e}")))
}
