use std::path::PathBuf;
use thiserror::Error;

pub mod clipboard;
pub mod file;
pub mod source;

pub use source::{parse_source, Source};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid file encoding: {0}")]
    InvalidEncoding(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Reads the text behind a parsed source argument.
pub fn load(source: &Source) -> Result<String, LoadError> {
    match source {
        Source::File(path) => file::load(path),
        Source::Clipboard => clipboard::load(),
    }
}
