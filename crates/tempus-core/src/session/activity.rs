//! Append-only activity event log, one JSON object per line.

use std::io;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::paths::DataPaths;

/// One record from the per-session activity stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub ts: String,
    pub tool: String,
}

impl ActivityEvent {
    /// Timestamp parsed as RFC3339 (nanosecond precision tolerated).
    /// `None` for malformed timestamps; callers skip those events.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.ts)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// Reads every event logged for a session.
///
/// A missing log file is an empty session, not an error. Blank and
/// malformed lines are skipped: one corrupt line must not abort the
/// whole analysis.
pub fn read_activity_log(paths: &DataPaths, session_id: &str) -> Result<Vec<ActivityEvent>> {
    let path = paths.activity_file(session_id);
    let data = match std::fs::read_to_string(&path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut events = Vec::new();
    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<ActivityEvent>(line) {
            Ok(event) => events.push(event),
            Err(_) => continue,
        }
    }
    Ok(events)
}
