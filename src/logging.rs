//! Logging setup.
//!
//! Log lines always go to a file. The viewer draws on the alternate screen in
//! raw mode, so anything written to stderr would land inside the panes.

use crate::engine::config::LogConfig;
use std::fs::File;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Could not open log file: {0}")]
    File(#[from] std::io::Error),

    #[error("Logger already installed: {0}")]
    AlreadySet(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Installs the global tracing subscriber writing to `config.file`.
///
/// Call once at startup.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(&config.file)?;
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
