// Configuration for wordiff view and logging
// The alignment lookahead is a fixed constant and deliberately not configurable

use std::path::PathBuf;
use tracing::Level;

/// Environment variable selecting the log level
pub const LOG_LEVEL_ENV: &str = "WORDIFF_LOG";
/// Environment variable naming a log file
pub const LOG_FILE_ENV: &str = "WORDIFF_LOG_FILE";

/// Viewer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Lines moved per single scroll step (default 1)
    pub scroll_step: u16,

    /// Lines moved per page step (default 10)
    pub page_step: u16,

    /// Show the color legend on startup
    pub show_legend: bool,

    /// Frame redraw interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            scroll_step: 1,
            page_step: 10,
            show_legend: true,
            tick_rate_ms: 1000 / 30,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub level: Level,

    /// Log destination. Always a file: the viewer owns the terminal
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            file: default_log_file(),
        }
    }
}

impl LogConfig {
    /// Reads `WORDIFF_LOG` and `WORDIFF_LOG_FILE`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(LOG_LEVEL_ENV).ok().as_deref(),
            std::env::var_os(LOG_FILE_ENV).map(PathBuf::from),
        )
    }

    fn from_values(level: Option<&str>, file: Option<PathBuf>) -> Self {
        let level = level
            .and_then(|value| value.trim().parse::<Level>().ok())
            .unwrap_or(Level::WARN);
        Self {
            level,
            file: file.unwrap_or_else(default_log_file),
        }
    }
}

/// `wordiff.log` in the system temp directory
pub fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("wordiff.log")
}

/// Master configuration
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub view: ViewConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            view: ViewConfig::default(),
            log: LogConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_config_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.scroll_step, 1);
        assert_eq!(config.page_step, 10);
        assert!(config.show_legend);
    }

    #[test]
    fn test_log_config_default_level_is_warn() {
        assert_eq!(LogConfig::default().level, Level::WARN);
    }

    #[test]
    fn test_log_config_defaults_to_temp_file() {
        let config = LogConfig::from_values(None, None);
        assert_eq!(config.file, std::env::temp_dir().join("wordiff.log"));
        assert_eq!(LogConfig::default().file, config.file);
    }

    #[test]
    fn test_log_config_parses_level() {
        let config = LogConfig::from_values(Some("debug"), None);
        assert_eq!(config.level, Level::DEBUG);
    }

    #[test]
    fn test_log_config_parses_level_case_insensitive() {
        let config = LogConfig::from_values(Some(" TRACE "), None);
        assert_eq!(config.level, Level::TRACE);
    }

    #[test]
    fn test_log_config_invalid_level_falls_back() {
        let config = LogConfig::from_values(Some("loud"), None);
        assert_eq!(config.level, Level::WARN);
    }

    #[test]
    fn test_log_config_keeps_file() {
        let config = LogConfig::from_values(None, Some(PathBuf::from("wordiff.log")));
        assert_eq!(config.file, PathBuf::from("wordiff.log"));
    }
}
