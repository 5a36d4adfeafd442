//! TOML-based application configuration.
//!
//! Stores:
//! - Calendar metadata (timezone label, observed holiday calendars)
//! - Planner fallback owner
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::paths::DataPaths;

/// Calendar metadata configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Timezone label recorded in generated calendar metadata.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Holiday calendars the generator observes.
    #[serde(default = "default_observed_holidays")]
    pub observes_holidays: Vec<String>,
}

/// Planner configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Fallback owner when the session state does not name one.
    #[serde(default)]
    pub default_owner: Option<String>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
}

// Default functions
fn default_timezone() -> String {
    "America/Chicago".into()
}
fn default_observed_holidays() -> Vec<String> {
    vec!["US Federal".into()]
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            observes_holidays: default_observed_holidays(),
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default(paths: &DataPaths) -> Self {
        Self::load(paths).unwrap_or_default()
    }

    pub fn load(paths: &DataPaths) -> Result<Self, ConfigError> {
        let path = paths.config_file();
        let data = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&data).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    pub fn save(&self, paths: &DataPaths) -> Result<(), ConfigError> {
        let path = paths.config_file();
        let data = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, data).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_sections() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.calendar.timezone, "America/Chicago");
        assert_eq!(config.calendar.observes_holidays, vec!["US Federal"]);
        assert!(config.planner.default_owner.is_none());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [planner]
            default_owner = "seanje"
            "#,
        )
        .unwrap();
        assert_eq!(config.planner.default_owner.as_deref(), Some("seanje"));
        assert_eq!(config.calendar.timezone, "America/Chicago");
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());

        let mut config = Config::default();
        config.planner.default_owner = Some("nova".into());
        config.save(&paths).unwrap();

        let loaded = Config::load(&paths).unwrap();
        assert_eq!(loaded.planner.default_owner.as_deref(), Some("nova"));
    }
}
