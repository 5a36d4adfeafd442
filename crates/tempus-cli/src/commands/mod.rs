pub mod awareness;
pub mod calendar;
pub mod context;
pub mod planner;

use std::fmt;

/// Command failure carrying the process exit code: 2 for usage errors,
/// 1 for everything else.
#[derive(Debug)]
pub struct CommandError {
    message: String,
    exit_code: i32,
}

impl CommandError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: 2,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: 1,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<tempus_core::CoreError> for CommandError {
    fn from(e: tempus_core::CoreError) -> Self {
        Self::failure(e.to_string())
    }
}

impl From<tempus_core::CalendarError> for CommandError {
    fn from(e: tempus_core::CalendarError) -> Self {
        Self::failure(e.to_string())
    }
}

impl From<tempus_core::SessionError> for CommandError {
    fn from(e: tempus_core::SessionError) -> Self {
        Self::failure(e.to_string())
    }
}

impl From<tempus_core::PlannerError> for CommandError {
    fn from(e: tempus_core::PlannerError) -> Self {
        Self::failure(e.to_string())
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(e: serde_json::Error) -> Self {
        Self::failure(e.to_string())
    }
}
