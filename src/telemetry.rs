use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize structured logging on stderr.
///
/// `RUST_LOG` wins over `level` when set. An unparsable `level` falls back to
/// [`DEFAULT_LEVEL`] with a warning. Stdout is left for command output.
/// Calling this again after a subscriber is installed does nothing.
pub fn init_telemetry(level: &str, json: bool) -> Result<()> {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => match EnvFilter::try_new(level) {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new(DEFAULT_LEVEL), Some(e)),
        },
    };

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if installed.is_ok() {
        tracing::debug!(level, json, "modthree telemetry initialized");
        if let Some(e) = rejected {
            tracing::warn!(level, error = %e, "Invalid log level, falling back to {}", DEFAULT_LEVEL);
        }
    }
    Ok(())
}
