//! Tracing subscriber setup.
//!
//! Filtering follows `RUST_LOG` (default `recap=info,tower_http=info`). Output
//! goes to stderr so `recap render` can keep stdout for the story itself.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

const DEFAULT_FILTER: &str = "recap=info,tower_http=info";

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = match config.format {
        LogFormat::Pretty => builder.with_line_number(true).try_init(),
        LogFormat::Json => builder.json().with_current_span(false).try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
