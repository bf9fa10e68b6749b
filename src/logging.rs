//! Logging setup
//!
//! The terminal belongs to the picker UI, so log output goes to a file next to
//! the executable. The filter defaults to `info` and can be overridden with the
//! `COMBOBOX_LOG` environment variable (`COMBOBOX_LOG=combobox=debug`).

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "COMBOBOX_LOG";

const LOG_FILE: &str = "combobox.log";

/// Get the log file path (same directory as executable)
pub fn log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global subscriber.
///
/// Logging is best effort: if the file cannot be opened nothing is logged.
/// Calling this twice is harmless.
pub fn init() {
    let file = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true) // Start fresh each run
        .open(log_path())
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init();
}
