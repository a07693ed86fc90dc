//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the `-v` derived level. The TUI owns the terminal,
//! so interactive sessions only log when a log file is given.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::core::{CalcError, CalcResult};

/// Where log records go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Append to the configured log file
    File,
    /// Standard error
    Stderr,
    /// Nowhere
    Discard,
}

/// Picks the sink for a configuration
#[must_use]
pub fn log_sink(config: &AppConfig, interactive: bool) -> LogSink {
    match (&config.log_file, interactive) {
        (Some(_), _) => LogSink::File,
        (None, true) => LogSink::Discard,
        (None, false) => LogSink::Stderr,
    }
}

/// Builds the level filter for a configuration
#[must_use]
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Installs the global tracing subscriber
pub fn init_tracing(config: &AppConfig, interactive: bool) -> CalcResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false);

    let installed = match (log_sink(config, interactive), &config.log_file) {
        (LogSink::File, Some(path)) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (LogSink::Stderr, _) => builder.with_writer(std::io::stderr).try_init(),
        _ => return Ok(()),
    };

    installed.map_err(|e| CalcError::logging(e.to_string()))
}
