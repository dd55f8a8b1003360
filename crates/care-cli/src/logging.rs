//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the configured filter. Output always goes to stderr
//! so command output on stdout stays machine-readable.

use crate::config::{CliConfig, LogFormat};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// Does nothing if a subscriber is already installed.
pub fn init(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.log_format {
        LogFormat::Text => builder.with_ansi(false).with_target(false).try_init(),
        LogFormat::Json => builder
            .json()
            .with_current_span(true)
            .flatten_event(true)
            .try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(filter = %config.log_filter, format = ?config.log_format, "logging initialised");
    }
}
