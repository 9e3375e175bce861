//! File logging.
//!
//! The terminal belongs to the TUI, so events go to `galaxy.log` in the data
//! directory instead of stderr. `RUST_LOG` overrides the configured level.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "galaxy.log";
const DEFAULT_FILTER: &str = "info";

/// Filter from `RUST_LOG`, falling back to the configured level.
fn env_filter(level: &str) -> EnvFilter {
    let level = level.trim();
    let fallback = if level.is_empty() { DEFAULT_FILTER } else { level };
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `log_dir/galaxy.log`.
///
/// Returns the log file path, or `None` when the file could not be created
/// and logging stays disabled.
pub fn init_logging(log_dir: &Path, level: &str) -> Option<PathBuf> {
    std::fs::create_dir_all(log_dir).ok()?;
    let path = log_dir.join(LOG_FILE);
    let log_file = std::fs::File::create(&path).ok()?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(file_layer)
        .try_init()
        .ok()?;
    Some(path)
}
