//! Core error types for tempus-core.
//!
//! This module defines the error hierarchy using thiserror. The taxonomy
//! follows the recovery rules of the engine: source-unavailable errors
//! (missing session file, missing planner, missing calendar entry) are
//! recovered by the aggregator, while write failures during calendar
//! generation are fatal for that invocation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tempus-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Calendar-related errors
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Planner-related errors
    #[error("Planner error: {0}")]
    Planner(#[from] PlannerError),

    /// Session-state-related errors
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {}: {message}", .path.display())]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {}: {message}", .path.display())]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Calendar-specific errors.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Year outside the supported proleptic Gregorian range
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    /// Date components do not name a real calendar day
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// No generated calendar data on disk for this year
    #[error("Calendar not generated for {year} (run calendar generate --year {year}): {}", .path.display())]
    NotGenerated { year: i32, path: PathBuf },

    /// Date missing from a loaded calendar document
    #[error("Date not found in calendar: {0}")]
    DateNotFound(String),

    /// Month missing from a loaded calendar document
    #[error("Month not found in calendar: {0}")]
    MonthNotFound(u32),

    /// Calendar document exists but cannot be parsed
    #[error("Failed to parse calendar {}: {message}", .path.display())]
    ParseFailed { path: PathBuf, message: String },

    /// Failed to persist generated calendar data
    #[error("Failed to write calendar {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Planner-specific errors.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// No planner template on disk for this owner
    #[error("Planner not found for '{owner}': {}", .path.display())]
    NotFound { owner: String, path: PathBuf },

    /// Planner template exists but cannot be parsed
    #[error("Failed to parse planner for '{owner}': {message}")]
    ParseFailed { owner: String, message: String },
}

/// Session-state-specific errors.
#[derive(Error, Debug)]
pub enum SessionError {
    /// No session state file (no active session)
    #[error("Failed to read session state: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Session state file exists but cannot be parsed
    #[error("Failed to parse session state: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
