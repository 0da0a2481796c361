//! Tracing setup.
//!
//! Logs go to a file, never to the terminal: the landing view owns the
//! screen and stray output would corrupt it. The filter comes from
//! `SYNAPSIS_LOG`, then `RUST_LOG`, then the configured level.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Config, LoggingConfig};

/// Environment variable with the highest-priority log filter.
pub const LOG_ENV: &str = "SYNAPSIS_LOG";

/// Build the filter from the environment, falling back to `default_level`.
pub fn build_filter(default_level: &str) -> EnvFilter {
    let from_env = [LOG_ENV, EnvFilter::DEFAULT_ENV].map(|key| env::var(key).ok());
    resolve_filter(&from_env, default_level)
}

/// First directive string that parses, in priority order; `info` if none do.
/// Unset and empty candidates are skipped.
fn resolve_filter(candidates: &[Option<String>], default_level: &str) -> EnvFilter {
    candidates
        .iter()
        .flatten()
        .map(String::as_str)
        .chain([default_level])
        .filter(|directives| !directives.trim().is_empty())
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Where the log file goes: the configured path or `<data dir>/synapsis.log`.
pub fn log_file_path(config: &LoggingConfig) -> Option<PathBuf> {
    config
        .file
        .clone()
        .or_else(|| Config::data_dir().map(|dir| dir.join("synapsis.log")))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Returns the log file in use, if any.
///
/// If no log file can be opened the subscriber is installed without an
/// output layer, preferring no logs over writing into the terminal.
pub fn init_logging(config: &LoggingConfig) -> Option<PathBuf> {
    let filter = build_filter(&config.level);

    let opened = log_file_path(config).map(|path| {
        let file = open_log_file(&path);
        (path, file)
    });

    match opened {
        Some((path, Ok(file))) => {
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .try_init()
                .is_ok();
            if installed {
                tracing::debug!(path = %path.display(), "Logging initialized");
            }
            Some(path)
        }
        _ => {
            let _ = tracing_subscriber::registry().with(filter).try_init();
            None
        }
    }
}
