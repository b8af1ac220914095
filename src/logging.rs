//! Diagnostics for the command-line tools.
//!
//! Command output goes to stdout, so log lines are written to stderr.
//! The level comes from `RUST_LOG` and defaults to `warn`.

use tracing_subscriber::{filter::LevelFilter, EnvFilter};

pub fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    // A second initialisation (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
