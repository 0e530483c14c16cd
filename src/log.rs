// src/log.rs
use crate::progress::{Progress, Status};

/// Forwards status lines to `tracing`. Success and info share the INFO level;
/// the bracketed tag carries the finer distinction.
pub struct TracingProgress;

impl Progress for TracingProgress {
    fn status(&mut self, status: Status, msg: &str) {
        match status {
            Status::Success | Status::Info => tracing::info!("{status} {msg}"),
            Status::Warning => tracing::warn!("{status} {msg}"),
            Status::Error => tracing::error!("{status} {msg}"),
        }
    }

    fn file_written(&mut self, path: &std::path::Path) {
        tracing::debug!(path = %path.display(), "file written");
    }
}

/// Console subscriber: bare `[STATUS] message` lines on stdout.
/// `RUST_LOG` overrides the default `info` filter.
#[cfg(feature = "cli")]
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .without_time()
        .with_level(false)
        .with_target(false)
        .try_init();
}
