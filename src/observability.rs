//! Tracing subscriber initialization.
//!
//! Sets up structured logging for the engine. The filter is resolved from the
//! `RUST_LOG` environment variable first, then the configured level, defaulting
//! to `info`. Initialization is idempotent: only the first call takes effect,
//! so libraries embedding the engine can safely call it alongside their own
//! setup.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Logs go to stderr in compact form. `level` is used when `RUST_LOG` is not
/// set; pass `None` for the `info` default.
pub fn init_tracing(level: Option<&str>) {
    let fallback = level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    // try_init so a second call (e.g. from tests) is a no-op.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
