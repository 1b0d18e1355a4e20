//! Diagnostic tracing, written to stderr.
//!
//! Reads `RUST_LOG`. Without it the filter is `warn`, or `debug` when the CLI
//! runs with `--verbose`. Stdout stays reserved for command output.
//!
//! ```bash
//! RUST_LOG=hexacli=debug hexacli list
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (e.g. from a test harness) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
