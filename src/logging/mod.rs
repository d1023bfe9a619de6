//! Logging initialization with environment-based formatters
//!
//! - Production: Structured JSON logs
//! - Sandbox: Colorful, human-readable logs

use crate::config::get_environment;
use tracing::debug;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

fn is_production(env: &str) -> bool {
    matches!(env, "production" | "prod")
}

/// Install the global subscriber, failing if one is already set.
///
/// `RUST_LOG` controls the filter and defaults to `info`.
pub fn try_init_logging() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if is_production(&get_environment()) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    }
}

/// Initialize logging based on the environment.
///
/// Safe to call more than once: if a subscriber is already installed it is
/// kept and the refusal is reported through it at `debug`.
pub fn init_logging() {
    if let Err(e) = try_init_logging() {
        debug!(error = %e, "Logging subscriber already installed");
    }
}
