//! User configuration for the terminal UI.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings read from the optional TOML config file.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// File the TUI writes its log to.
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    log_filter: String,

    /// Show the 1-9 key in empty cells.
    show_cell_hints: bool,

    /// Colour for X marks (a ratatui colour name or `#rrggbb`).
    x_color: String,

    /// Colour for O marks.
    o_color: String,

    /// Where the settings were read from.
    #[serde(skip)]
    source: ConfigSource,
}

/// Origin of a loaded [`UiConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Display)]
pub enum ConfigSource {
    /// Built-in defaults (no file, or parsed from text).
    #[default]
    #[display("defaults")]
    Defaults,
    /// A TOML file at this path.
    #[display("{}", _0.display())]
    File(PathBuf),
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("rewind_games.log"),
            log_filter: "info".to_string(),
            show_cell_hints: true,
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
            source: ConfigSource::Defaults,
        }
    }
}

impl UiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let mut config = Self::from_toml(&content)?;
        config.source = ConfigSource::File(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Config parsed");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with cell hints switched on or off.
    pub fn with_cell_hints(mut self, show: bool) -> Self {
        self.show_cell_hints = show;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = UiConfig::from_toml("").unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides_fields() {
        let config = UiConfig::from_toml("show_cell_hints = false\nx_color = \"green\"\n").unwrap();
        assert!(!config.show_cell_hints());
        assert_eq!(config.x_color(), "green");
        assert_eq!(config.o_color(), "red");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = UiConfig::from_toml("show_cell_hints = maybe").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = UiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, UiConfig::default());
        assert_eq!(*config.source(), ConfigSource::Defaults);
    }

    #[test]
    fn test_existing_file_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();
        let config = UiConfig::load_or_default(file.path()).unwrap();
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(*config.source(), ConfigSource::File(file.path().to_path_buf()));
        assert_eq!(config.source().to_string(), file.path().display().to_string());
    }
}
