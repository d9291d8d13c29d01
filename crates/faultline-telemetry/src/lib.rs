//! Logging setup for Faultline
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a fmt
//! layer in text or JSON form.

use faultline_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured filter. An unparsable
/// filter falls back to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &TelemetryConfig) -> anyhow::Result<()> {
    let filter = build_filter(config);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry.with(fmt_layer).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!(filter = %config.filter, format = ?config.format, "telemetry initialized");

    Ok(())
}

fn build_filter(config: &TelemetryConfig) -> EnvFilter {
    if let Ok(directives) = std::env::var(EnvFilter::DEFAULT_ENV)
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }

    EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"))
}
