//! Deployment configuration for taskrank
//!
//! Configuration is stored in `taskrank.toml` and supplies the holiday
//! calendar and scoring defaults. Holidays are deployment data, never
//! engine logic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::{Date, Strategy, DEFAULT_STRATEGY_LABEL};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "taskrank.toml";

/// Errors raised while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A holiday entry is not a `YYYY-MM-DD` date
    #[error("Invalid holiday '{value}': {source}")]
    Holiday {
        /// The offending entry
        value: String,
        /// Parser error
        source: chrono::ParseError,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Holiday calendar
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Scoring defaults
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Holiday calendar configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CalendarConfig {
    /// Holidays as `YYYY-MM-DD` strings
    #[serde(default)]
    pub holidays: Vec<String>,
}

/// Scoring defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Strategy used when a request omits one
    #[serde(default = "default_strategy")]
    pub default_strategy: String,

    /// How dependency indices outside the task list are handled
    #[serde(default)]
    pub dependency_policy: DanglingPolicy,
}

/// Treatment of dependency indices that point outside the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingPolicy {
    /// Drop the edge as if it were absent
    #[default]
    Ignore,
    /// Refuse the whole task list
    Reject,
}

fn default_strategy() -> String {
    DEFAULT_STRATEGY_LABEL.to_string()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_strategy: default_strategy(),
            dependency_policy: DanglingPolicy::default(),
        }
    }
}

impl ScoringConfig {
    /// Resolve the configured default strategy.
    pub fn strategy(&self) -> Strategy {
        Strategy::from_label(&self.default_strategy)
    }
}

impl CalendarConfig {
    /// Parse the holiday list into dates.
    pub fn holiday_dates(&self) -> Result<BTreeSet<Date>, ConfigError> {
        self.holidays
            .iter()
            .map(|value| {
                Date::parse_from_str(value, "%Y-%m-%d").map_err(|source| ConfigError::Holiday {
                    value: value.clone(),
                    source,
                })
            })
            .collect()
    }
}

impl Config {
    /// Load configuration from a TOML file.
    /// Returns default config if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;

        // Surface bad holiday entries at load time rather than at first use.
        config.calendar.holiday_dates()?;

        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.calendar.holidays.is_empty());
        assert_eq!(config.scoring.default_strategy, "Smart Balance");
        assert_eq!(config.scoring.dependency_policy, DanglingPolicy::Ignore);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);

        let mut config = Config::default();
        config.calendar.holidays = vec!["2025-01-01".to_string()];
        config.scoring.dependency_policy = DanglingPolicy::Reject;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_parse_custom_config() {
        let toml_str = r#"
[calendar]
holidays = ["2025-01-01", "2025-01-26", "2025-03-14"]

[scoring]
default_strategy = "Deadline Driven"
dependency_policy = "reject"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let holidays = config.calendar.holiday_dates().unwrap();
        assert_eq!(holidays.len(), 3);
        assert!(holidays.contains(&Date::from_ymd_opt(2025, 1, 26).unwrap()));
        assert_eq!(config.scoring.strategy(), Strategy::DeadlineDriven);
        assert_eq!(config.scoring.dependency_policy, DanglingPolicy::Reject);
    }

    #[test]
    fn test_invalid_holiday_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[calendar]\nholidays = [\"2025-13-01\"]\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Holiday { ref value, .. } if value == "2025-13-01"));
    }
}
