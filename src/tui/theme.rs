//! Colours and display switches resolved from [`UiConfig`].

use crate::config::{ConfigError, UiConfig};
use derive_getters::Getters;
use ratatui::style::{Color, Modifier, Style};
use rewind_tictactoe::Mark;
use std::str::FromStr;
use tracing::instrument;

/// Resolved display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Theme {
    x_color: Color,
    o_color: Color,
    show_cell_hints: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x_color: Color::Blue,
            o_color: Color::Red,
            show_cell_hints: true,
        }
    }
}

impl Theme {
    /// Resolves colour names from the config.
    #[instrument(skip(config))]
    pub fn from_config(config: &UiConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            x_color: parse_color(config.x_color())?,
            o_color: parse_color(config.o_color())?,
            show_cell_hints: *config.show_cell_hints(),
        })
    }

    /// Style for a placed mark.
    pub fn mark_style(&self, mark: Mark) -> Style {
        let color = match mark {
            Mark::X => self.x_color,
            Mark::O => self.o_color,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

fn parse_color(name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name).map_err(|_| ConfigError::new(format!("Unknown colour '{}'", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_resolves() {
        let theme = Theme::from_config(&UiConfig::default()).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_unknown_colour_rejected() {
        let config = UiConfig::from_toml("o_color = \"not-a-colour\"").unwrap();
        let err = Theme::from_config(&config).unwrap_err();
        assert!(err.message.contains("not-a-colour"));
    }

    #[test]
    fn test_hex_colour_accepted() {
        let config = UiConfig::from_toml("x_color = \"#00ff00\"").unwrap();
        let theme = Theme::from_config(&config).unwrap();
        assert_eq!(*theme.x_color(), Color::Rgb(0, 255, 0));
    }
}
