//! Source argument parsing
//!
//! Each side of a comparison is named on the command line:
//! - `@@` → read from the clipboard
//! - `@path` or `path` → read from a file

use std::path::PathBuf;

/// Where one side of a comparison is read from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(PathBuf),
    Clipboard,
}

/// Parse a command line argument into a Source
///
/// Returns `None` for blank input. Bare paths are taken verbatim since the
/// shell has already split the arguments.
pub fn parse_source(input: &str) -> Option<Source> {
    if input.trim().is_empty() {
        return None;
    }

    if input.trim() == "@@" {
        return Some(Source::Clipboard);
    }

    let path = match input.strip_prefix('@') {
        Some(rest) => rest.trim(),
        None => input,
    };
    if path.is_empty() {
        None
    } else {
        Some(Source::File(PathBuf::from(path)))
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Clipboard => write!(f, "clipboard"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clipboard() {
        assert_eq!(parse_source("@@"), Some(Source::Clipboard));
    }

    #[test]
    fn test_parse_bare_path() {
        assert_eq!(
            parse_source("old.txt"),
            Some(Source::File(PathBuf::from("old.txt")))
        );
    }

    #[test]
    fn test_parse_prefixed_path_with_spaces() {
        assert_eq!(
            parse_source("@  new.txt"),
            Some(Source::File(PathBuf::from("new.txt")))
        );
    }

    #[test]
    fn test_parse_bare_path_keeps_surrounding_spaces() {
        assert_eq!(
            parse_source(" notes .txt "),
            Some(Source::File(PathBuf::from(" notes .txt ")))
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_source(""), None);
        assert_eq!(parse_source("   "), None);
        assert_eq!(parse_source("@"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Source::Clipboard.to_string(), "clipboard");
        assert_eq!(Source::File(PathBuf::from("a.txt")).to_string(), "a.txt");
    }
}
