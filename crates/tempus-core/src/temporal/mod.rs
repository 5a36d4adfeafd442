//! Four-dimension temporal context assembly.
//!
//! The engine composes four independent views of "what time is it for
//! this working session":
//!
//! 1. External time -- the clock (what time is it in the world?)
//! 2. Internal time -- the session clock (how long have I been working?)
//! 3. Internal schedule -- the planner (what should be happening now?)
//! 4. External calendar -- the base calendar (what kind of day is this?)
//!
//! Each dimension is acquired independently; a missing or malformed
//! source degrades only its own dimension, never the other three.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::store;
use crate::clock::Clock;
use crate::duration::format_duration;
use crate::error::Result;
use crate::paths::DataPaths;
use crate::planner::{match_current_activity, next_activity, BlockKind, Planner};
use crate::session::{read_activity_log, AwarenessAnalyzer, SessionState, TimeAwareness};

/// Coarse time-of-day category derived from hour alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        };
        f.write_str(name)
    }
}

/// Coarse circadian phase derived from hour alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircadianPhase {
    Peak,
    Normal,
    Low,
}

impl std::fmt::Display for CircadianPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CircadianPhase::Peak => "peak",
            CircadianPhase::Normal => "normal",
            CircadianPhase::Low => "low",
        };
        f.write_str(name)
    }
}

/// System clock awareness. Pure function of the instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalTime {
    pub current_time: DateTime<Utc>,
    pub formatted: String,
    pub hour: u32,
    pub minute: u32,
    pub time_of_day: TimeOfDay,
    pub circadian_phase: CircadianPhase,
}

impl ExternalTime {
    pub fn at(now: DateTime<Utc>) -> Self {
        let hour = now.hour();
        let (time_of_day, circadian_phase) = match hour {
            5..=11 => (TimeOfDay::Morning, CircadianPhase::Peak),
            12..=16 => (TimeOfDay::Afternoon, CircadianPhase::Normal),
            17..=20 => (TimeOfDay::Evening, CircadianPhase::Normal),
            _ => (TimeOfDay::Night, CircadianPhase::Low),
        };

        Self {
            current_time: now,
            formatted: now.format("%a %b %d, %Y at %H:%M:%S").to_string(),
            hour,
            minute: now.minute(),
            time_of_day,
            circadian_phase,
        }
    }
}

/// How far into the session we are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// Under 30 minutes in.
    Fresh,
    /// Between 30 minutes and two hours.
    Active,
    /// Two hours or more.
    Long,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionPhase::Fresh => "fresh",
            SessionPhase::Active => "active",
            SessionPhase::Long => "long",
        };
        f.write_str(name)
    }
}

/// Session clock awareness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternalTime {
    pub session_start: DateTime<Utc>,
    pub elapsed_secs: i64,
    pub elapsed_formatted: String,
    pub session_phase: SessionPhase,
}

/// Planner awareness: what should be happening right now.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternalSchedule {
    pub current_activity: String,
    pub activity_kind: BlockKind,
    pub in_work_window: bool,
    pub expected_downtime: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_activity_time: Option<String>,
}

/// Base calendar awareness: what kind of day this is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalCalendar {
    pub date: String,
    pub year: i32,
    pub day_of_week: String,
    pub week_number: u32,
    pub is_holiday: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    pub month_name: String,
    pub day_of_month: u32,
}

/// Complete time and schedule awareness.
///
/// `external_time` is always populated; the other dimensions are `None`
/// when their backing source was unavailable, so callers can tell a
/// degraded dimension from a real zero measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalContext {
    pub external_time: ExternalTime,
    pub internal_time: Option<InternalTime>,
    pub internal_schedule: Option<InternalSchedule>,
    pub external_calendar: Option<ExternalCalendar>,
}

/// The top-level aggregator. Holds an injected clock and the data-file
/// layout; every query is a fresh read pass over the source files.
pub struct TemporalEngine<C: Clock> {
    clock: C,
    paths: DataPaths,
}

impl<C: Clock> TemporalEngine<C> {
    pub fn new(clock: C, paths: DataPaths) -> Self {
        Self { clock, paths }
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Assembles all four dimensions. Never returns a hard error: each
    /// fallible dimension degrades to `None` on its own.
    pub fn temporal_context(&self) -> TemporalContext {
        let now = self.clock.now();

        let internal_time = match self.internal_time(now) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!(error = %e, "internal time unavailable");
                None
            }
        };
        let internal_schedule = match self.internal_schedule(now) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!(error = %e, "internal schedule unavailable");
                None
            }
        };
        let external_calendar = match self.external_calendar(now) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!(error = %e, "external calendar unavailable");
                None
            }
        };

        TemporalContext {
            external_time: ExternalTime::at(now),
            internal_time,
            internal_schedule,
            external_calendar,
        }
    }

    /// Session clock: start, elapsed, phase.
    pub fn internal_time(&self, now: DateTime<Utc>) -> Result<InternalTime> {
        let state = SessionState::read(&self.paths)?;
        let elapsed = state.elapsed(now);

        let session_phase = match elapsed.num_minutes() {
            m if m < 30 => SessionPhase::Fresh,
            m if m < 120 => SessionPhase::Active,
            _ => SessionPhase::Long,
        };

        Ok(InternalTime {
            session_start: state.start_time,
            elapsed_secs: elapsed.num_seconds(),
            elapsed_formatted: format_duration(elapsed),
            session_phase,
        })
    }

    /// Planner position: the owner comes from the session state, the
    /// planner is loaded fresh for that owner.
    pub fn internal_schedule(&self, now: DateTime<Utc>) -> Result<InternalSchedule> {
        let state = SessionState::read(&self.paths)?;
        let planner = Planner::load(&self.paths, &state.user_id)?;

        let matched = match_current_activity(now, &planner);
        let next = next_activity(now, &planner);

        Ok(InternalSchedule {
            current_activity: matched.description,
            activity_kind: matched.kind,
            in_work_window: matched.in_work_window,
            expected_downtime: matched.expected_downtime,
            next_activity: next.as_ref().map(|n| n.description.clone()),
            next_activity_time: next.map(|n| n.starts_at),
        })
    }

    /// Base calendar facts for today.
    pub fn external_calendar(&self, now: DateTime<Utc>) -> Result<ExternalCalendar> {
        let (year, month, day) = (now.year(), now.month(), now.day());

        let date_info = store::get_date_info(&self.paths, year, month, day)?;
        let month_info = store::get_month_info(&self.paths, year, month)?;

        Ok(ExternalCalendar {
            date: date_info.date,
            year,
            day_of_week: date_info.weekday,
            week_number: date_info.week_number,
            is_holiday: date_info.is_holiday,
            holiday_name: date_info.holiday_name,
            month_name: month_info.name,
            day_of_month: day,
        })
    }

    /// The three-stage activity breakdown for the current session.
    /// Unlike [`temporal_context`](Self::temporal_context) this needs a
    /// session to exist, so it returns the session error to the caller.
    pub fn time_awareness(&self) -> Result<(SessionState, TimeAwareness)> {
        let state = SessionState::read(&self.paths)?;
        let events = read_activity_log(&self.paths, &state.session_id)?;
        let awareness = AwarenessAnalyzer::new().analyze(state.start_time, &events, self.clock.now());
        Ok((state, awareness))
    }
}
