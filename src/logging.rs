use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const FILTER_ENV: &str = "REGDASH_LOG";

pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Installs the global subscriber writing to `path`.
///
/// `REGDASH_LOG` takes an env-filter directive; the default is `debug` when the file came
/// from `DEBUG`, `info` otherwise.
pub fn init_file_logging(path: &Path, verbose: bool) -> Result<()> {
    let file = open_log_file(path)?;
    let default = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {}", e))
}

#[cfg(test)]
#[path = "tests/logging_tests.rs"]
mod tests;
