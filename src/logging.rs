//! Diagnostic logging.
//!
//! Structured `tracing` events rendered to stderr, so they never mix with the
//! status lines the host harness reads from stdout.
//!
//! Filter priority (highest first):
//! 1. `ARROW_LAUNCHER_LOG` environment variable (any `EnvFilter` directive)
//! 2. `--verbose` (debug)
//! 3. Default (warn)

use crate::error::{LauncherError, Result};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable carrying a log filter directive.
pub const LOG_ENV_VARIABLE: &str = "ARROW_LAUNCHER_LOG";

/// Install the global subscriber.
pub fn init_logging(verbose: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_env_filter(verbose))
        .with(
            fmt::layer()
                .with_target(false)
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| LauncherError::UserError(format!("failed to initialize logging: {}", e)))
}

fn build_env_filter(verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VARIABLE) {
        return filter;
    }

    EnvFilter::new(default_level(verbose))
}

fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), "warn");
        assert_eq!(default_level(true), "debug");
    }
}
