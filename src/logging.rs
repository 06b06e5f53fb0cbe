//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays clean for command output and the MCP
//! stdio transport.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable overriding the log filter, e.g. `TOKENCTL_LOG=trace`.
pub const LOG_ENV: &str = "TOKENCTL_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "tokenctl=debug" } else { "warn" }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
