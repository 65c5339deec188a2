//! Structured logging setup.
//!
//! Logs are emitted as JSON lines on stdout so they can be ingested by a
//! log collector without further parsing. The log level can be controlled
//! via the `RUST_LOG` environment variable.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system.
///
/// The default level is INFO, raised to DEBUG for this crate when `debug`
/// is set. An explicit `RUST_LOG` value takes precedence over both.
pub fn init(debug: bool) {
    let default_filter = if debug { "sponowd=debug,info" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(false)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
