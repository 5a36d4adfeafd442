//! Session state and activity accounting.
//!
//! The session-lifecycle collaborator writes the state file and the
//! activity log; this engine only reads them.

pub mod activity;
pub mod awareness;

pub use activity::{read_activity_log, ActivityEvent};
pub use awareness::{
    classify_gap, ActivityGap, ActivityState, AwarenessAnalyzer, GapClassification, TimeAwareness,
};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::paths::DataPaths;

/// Current session state, read from `<data>/session/current.json`.
///
/// The collaborator writes a richer document; only the fields the
/// engine consumes are modeled, the rest are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub session_id: String,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub start_formatted: String,
}

impl SessionState {
    /// Reads the state file fresh; no caching across queries.
    pub fn read(paths: &DataPaths) -> Result<Self, SessionError> {
        let path = paths.session_file();
        let data =
            std::fs::read_to_string(&path).map_err(|_| SessionError::NotFound { path })?;
        serde_json::from_str(&data).map_err(|e| SessionError::ParseFailed(e.to_string()))
    }

    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        now - self.start_time
    }
}
