//! Diagnostic logging setup
//!
//! One-shot commands log to stderr. The TUI owns the terminal, so while it
//! runs logs go to a file in the base directory instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::SpendError;

/// Where diagnostic log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Build the filter: `RUST_LOG` wins, otherwise `level` for this crate only
fn build_filter(level: LevelFilter) -> EnvFilter {
    match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        // The library and the binary share the crate name
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    }
}

/// Initializes the tracing subscriber
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logger(level: LevelFilter, target: LogTarget<'_>) -> Result<(), SpendError> {
    let filter = build_filter(level);

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| SpendError::Io(format!("Failed to open log file: {}", e)))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if let Err(e) = result {
        tracing::debug!("logger already initialized: {}", e);
    }
    Ok(())
}
