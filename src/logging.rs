//! Diagnostic logging to stderr.
//!
//! Filter comes from `PASSGEN_LOG` (EnvFilter syntax), default `warn`.
//! Password contents are never logged.

use tracing_subscriber::EnvFilter;

pub const ENV_VAR: &str = "PASSGEN_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
