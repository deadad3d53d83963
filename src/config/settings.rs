//! Configuration settings for pomogo.
//!
//! Settings are loaded from `~/.pomogo/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::PomogoError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer settings.
    pub timer: TimerConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color theme for the timer screen.
    #[serde(default)]
    pub theme: Theme,
}

/// Color theme for the timer screen.
///
/// Purely presentational: the flag only selects a palette.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark-terminal palette.
    #[default]
    Dark,
    /// Light-terminal palette.
    Light,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Countdown length in minutes.
    #[serde(default = "default_countdown_minutes")]
    pub countdown_minutes: u32,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_countdown_minutes() -> u32 {
    25
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            theme: Theme::default(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            countdown_minutes: default_countdown_minutes(),
        }
    }
}

impl TimerConfig {
    /// Countdown length in seconds, as the engine consumes it.
    ///
    /// Saturates rather than overflowing on absurd configured values.
    #[must_use]
    pub const fn countdown_seconds(&self) -> u32 {
        self.countdown_minutes.saturating_mul(60)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, PomogoError> {
        let paths = crate::config::Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomogoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomogoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomogoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.timer.countdown_minutes, 25);
        assert_eq!(config.timer.countdown_seconds(), 1500);
        assert_eq!(config.general.theme, Theme::Dark);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from_path(&temp_dir.path().join("config.yaml")).unwrap();
        assert_eq!(config.timer.countdown_minutes, 25);
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "timer:\n  countdown_minutes: 50\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.timer.countdown_minutes, 50);
        assert_eq!(config.general.theme, Theme::Dark);
    }

    #[test]
    fn test_countdown_seconds_saturates() {
        let timer = TimerConfig {
            countdown_minutes: u32::MAX,
        };
        assert_eq!(timer.countdown_seconds(), u32::MAX);
    }

    #[test]
    fn test_load_theme() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "general:\n  theme: light\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.general.theme, Theme::Light);
    }

    #[test]
    fn test_load_invalid_config_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "timer: [not, a, mapping]").unwrap();

        assert!(Config::load_from_path(&path).is_err());
    }
}
