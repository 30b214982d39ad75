//! Subscriber setup for the two binaries.

use crate::error::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Appends plain-text logs to `path`. The interactive binary owns the
/// terminal, so this is the only place its logs can go.
pub fn init_file(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_or("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Logs to stderr, `RUST_LOG` or warnings only.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(filter_or("warn"))
        .with_writer(std::io::stderr)
        .init();
}

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
