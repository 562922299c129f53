//! Diagnostic tracing for jsonsub.
//!
//! # Output streams
//!
//! - **Tracing (this module)**: diagnostics controlled by `RUST_LOG`, written
//!   to stderr. Rule assembly and substitution passes log at `debug`; written
//!   output files log at `info`.
//!
//! - **Command output (`apply`, `check`, `init`)**: substituted documents and
//!   rule counts on stdout. Always printed, unaffected by `RUST_LOG`, so
//!   `jsonsub apply doc.json > out.json` stays valid JSON at any log level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=jsonsub=debug jsonsub apply doc.json
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
