//! Three-stage session time accounting.
//!
//! Partitions wall-clock time since session start into active uptime
//! and semi-downtime: idle gaps longer than the threshold between
//! points of known activity. Gaps are recomputed on every query and
//! never persisted.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::activity::ActivityEvent;
use crate::planner::{match_current_activity, Planner};

/// Idle threshold in minutes: a quiet stretch longer than this is
/// counted as semi-downtime rather than thinking time.
pub const IDLE_THRESHOLD_MIN: i64 = 30;

/// A contiguous idle interval `[start, end)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityGap {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_secs: i64,
}

impl ActivityGap {
    fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            duration_secs: (end - start).num_seconds(),
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::seconds(self.duration_secs)
    }
}

/// Whether the session is currently active or idling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityState {
    Uptime,
    SemiDowntime,
}

/// The three-stage breakdown for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeAwareness {
    pub wall_clock_secs: i64,
    pub active_uptime_secs: i64,
    pub semi_downtime_secs: i64,
    pub last_activity: DateTime<Utc>,
    pub activity_gaps: Vec<ActivityGap>,
    pub current_state: ActivityState,
}

impl TimeAwareness {
    pub fn wall_clock(&self) -> Duration {
        Duration::seconds(self.wall_clock_secs)
    }

    pub fn active_uptime(&self) -> Duration {
        Duration::seconds(self.active_uptime_secs)
    }

    pub fn semi_downtime(&self) -> Duration {
        Duration::seconds(self.semi_downtime_secs)
    }

    pub fn uptime_percent(&self) -> f64 {
        if self.wall_clock_secs <= 0 {
            return 0.0;
        }
        self.active_uptime_secs as f64 / self.wall_clock_secs as f64 * 100.0
    }

    pub fn downtime_percent(&self) -> f64 {
        if self.wall_clock_secs <= 0 {
            return 0.0;
        }
        self.semi_downtime_secs as f64 / self.wall_clock_secs as f64 * 100.0
    }
}

/// Gap detector over a session's activity timeline.
pub struct AwarenessAnalyzer {
    idle_threshold: Duration,
}

impl AwarenessAnalyzer {
    pub fn new() -> Self {
        Self {
            idle_threshold: Duration::minutes(IDLE_THRESHOLD_MIN),
        }
    }

    /// Override the idle threshold.
    pub fn with_idle_threshold(mut self, threshold: Duration) -> Self {
        self.idle_threshold = threshold;
        self
    }

    /// Computes the three-stage breakdown at `now`.
    ///
    /// Events with unparseable timestamps are discarded. Timestamps are
    /// sorted before analysis; the log file is not guaranteed to be
    /// append-ordered.
    pub fn analyze(
        &self,
        session_start: DateTime<Utc>,
        events: &[ActivityEvent],
        now: DateTime<Utc>,
    ) -> TimeAwareness {
        let wall_clock = now - session_start;

        let mut activity_times: Vec<DateTime<Utc>> =
            events.iter().filter_map(ActivityEvent::timestamp).collect();
        activity_times.sort_unstable();

        if activity_times.is_empty() {
            // No activity at all: the whole elapsed interval is one
            // semi-downtime gap.
            let gaps = if wall_clock > Duration::zero() {
                vec![ActivityGap::new(session_start, now)]
            } else {
                Vec::new()
            };
            return TimeAwareness {
                wall_clock_secs: wall_clock.num_seconds().max(0),
                active_uptime_secs: 0,
                semi_downtime_secs: wall_clock.num_seconds().max(0),
                last_activity: session_start,
                activity_gaps: gaps,
                current_state: ActivityState::SemiDowntime,
            };
        }

        let mut gaps = Vec::new();
        let mut total_gap = Duration::zero();

        // Session start to first activity.
        let first = activity_times[0];
        if first - session_start > self.idle_threshold {
            let gap = ActivityGap::new(session_start, first);
            total_gap += gap.duration();
            gaps.push(gap);
        }

        // Between consecutive activities.
        for pair in activity_times.windows(2) {
            let (prev, curr) = (pair[0], pair[1]);
            if curr - prev > self.idle_threshold {
                let gap = ActivityGap::new(prev, curr);
                total_gap += gap.duration();
                gaps.push(gap);
            }
        }

        // Last activity to now; an open trailing gap means the session
        // is currently idle.
        let last = *activity_times.last().unwrap();
        let mut current_state = ActivityState::Uptime;
        if now - last > self.idle_threshold {
            let gap = ActivityGap::new(last, now);
            total_gap += gap.duration();
            gaps.push(gap);
            current_state = ActivityState::SemiDowntime;
        }

        TimeAwareness {
            wall_clock_secs: wall_clock.num_seconds(),
            active_uptime_secs: (wall_clock - total_gap).num_seconds(),
            semi_downtime_secs: total_gap.num_seconds(),
            last_activity: last,
            activity_gaps: gaps,
            current_state,
        }
    }
}

impl Default for AwarenessAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Advisory label for one gap: was this downtime on the schedule?
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapClassification {
    pub expected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Matches a gap's start against the planner. Expected only when the
/// containing block is planned downtime (sleep, meal, break). Does not
/// affect the numeric uptime/downtime totals.
pub fn classify_gap(gap_start: DateTime<Utc>, planner: Option<&Planner>) -> GapClassification {
    let Some(planner) = planner else {
        return GapClassification {
            expected: false,
            reason: None,
        };
    };

    let matched = match_current_activity(gap_start, planner);
    if matched.expected_downtime {
        GapClassification {
            expected: true,
            reason: Some(format!("{} ({})", matched.description, matched.kind)),
        }
    } else {
        GapClassification {
            expected: false,
            reason: None,
        }
    }
}
