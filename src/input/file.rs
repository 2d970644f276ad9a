use super::LoadError;
use std::io;
use std::path::Path;
use tracing::debug;

/// Loads a text file. Empty files are valid input for a comparison.
pub fn load(path: &Path) -> Result<String, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        io::ErrorKind::InvalidData => LoadError::InvalidEncoding(path.to_path_buf()),
        _ => LoadError::Io(err),
    })?;

    debug!(path = %path.display(), bytes = content.len(), "loaded file");
    Ok(content)
}
