//! Data directory layout.
//!
//! All engine state lives as flat files under one root:
//!
//! ```text
//! <root>/config.toml                                 application config
//! <root>/session/current.json                        session state
//! <root>/session/activity/<session_id>.jsonl         activity event log
//! <root>/planner/templates/<owner>-template.json     planner documents
//! <root>/calendar/base/<year>.json                   year calendar
//! <root>/calendar/base/<year>/<mm>-<monthname>.json  monthly calendars
//! ```

use std::path::{Path, PathBuf};

use crate::calendar::month_name;
use crate::error::Result;

/// Returns `~/.config/tempus[-dev]/` based on TEMPUS_ENV.
///
/// Set TEMPUS_ENV=dev to use the development data directory, or
/// TEMPUS_DATA_DIR to override the root entirely.
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var("TEMPUS_DATA_DIR") {
        Ok(root) if !root.is_empty() => PathBuf::from(root),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("TEMPUS_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("tempus-dev")
            } else {
                base_dir.join("tempus")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Resolved locations of every persisted artifact.
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Data paths rooted at [`data_dir`].
    pub fn discover() -> Result<Self> {
        Ok(Self::new(data_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn session_file(&self) -> PathBuf {
        self.root.join("session").join("current.json")
    }

    pub fn activity_file(&self, session_id: &str) -> PathBuf {
        self.root
            .join("session")
            .join("activity")
            .join(format!("{session_id}.jsonl"))
    }

    pub fn planner_file(&self, owner: &str) -> PathBuf {
        self.root
            .join("planner")
            .join("templates")
            .join(format!("{owner}-template.json"))
    }

    pub fn calendar_dir(&self) -> PathBuf {
        self.root.join("calendar").join("base")
    }

    pub fn year_calendar_file(&self, year: i32) -> PathBuf {
        self.calendar_dir().join(format!("{year}.json"))
    }

    pub fn month_calendar_file(&self, year: i32, month: u32) -> PathBuf {
        let name = month_name(month).unwrap_or("unknown").to_lowercase();
        self.calendar_dir()
            .join(year.to_string())
            .join(format!("{month:02}-{name}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_under_root() {
        let paths = DataPaths::new("/tmp/tempus-test");
        assert_eq!(
            paths.session_file(),
            PathBuf::from("/tmp/tempus-test/session/current.json")
        );
        assert_eq!(
            paths.activity_file("2025-11-04_0015"),
            PathBuf::from("/tmp/tempus-test/session/activity/2025-11-04_0015.jsonl")
        );
        assert_eq!(
            paths.planner_file("seanje"),
            PathBuf::from("/tmp/tempus-test/planner/templates/seanje-template.json")
        );
        assert_eq!(
            paths.year_calendar_file(2025),
            PathBuf::from("/tmp/tempus-test/calendar/base/2025.json")
        );
        assert_eq!(
            paths.month_calendar_file(2025, 11),
            PathBuf::from("/tmp/tempus-test/calendar/base/2025/11-november.json")
        );
    }
}
