use super::LoadError;
use arboard::Clipboard;
use tracing::debug;

pub fn load() -> Result<String, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    debug!(bytes = text.len(), "loaded text from clipboard");
    Ok(text)
}
