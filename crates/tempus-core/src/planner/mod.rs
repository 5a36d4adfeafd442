//! Planner documents: recurring daily and weekly schedule patterns.
//!
//! A planner is an owner-scoped JSON document describing what *should*
//! be happening at any minute of the week. It is read fresh on every
//! query; owners edit these files by hand and a long-lived cache would
//! go stale.

pub mod matcher;

pub use matcher::{match_current_activity, next_activity, NextActivity, ScheduleMatch};

use std::collections::BTreeMap;
use std::fmt;

use chrono::Weekday;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PlannerError;
use crate::paths::DataPaths;

/// Semantic type of a schedule block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Work,
    Sleep,
    Meal,
    Break,
    Commitment,
    Flex,
}

impl BlockKind {
    /// Sleep, meals, and breaks are planned downtime.
    pub fn is_downtime(self) -> bool {
        matches!(self, BlockKind::Sleep | BlockKind::Meal | BlockKind::Break)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Work => "work",
            BlockKind::Sleep => "sleep",
            BlockKind::Meal => "meal",
            BlockKind::Break => "break",
            BlockKind::Commitment => "commitment",
            BlockKind::Flex => "flex",
        };
        f.write_str(name)
    }
}

/// A minute offset within a day (0-1439).
///
/// Authored planner documents write these as `"HH:MM"` strings; bare
/// minute integers are also accepted. Parsed once at load time, never
/// re-parsed during matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    pub const MAX: u16 = 24 * 60 - 1;

    pub fn new(minutes: u16) -> Option<Self> {
        (minutes <= Self::MAX).then_some(Self(minutes))
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Parses `"HH:MM"`.
    pub fn from_hhmm(s: &str) -> Option<Self> {
        let (hours, minutes) = s.split_once(':')?;
        let hours: u16 = hours.parse().ok()?;
        let minutes: u16 = minutes.parse().ok()?;
        if hours >= 24 || minutes >= 60 {
            return None;
        }
        Some(Self(hours * 60 + minutes))
    }

    pub fn to_hhmm(self) -> String {
        format!("{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hhmm())
    }
}

impl Serialize for MinuteOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hhmm())
    }
}

impl<'de> Deserialize<'de> for MinuteOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Minutes(u16),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(s) => MinuteOfDay::from_hhmm(&s)
                .ok_or_else(|| de::Error::custom(format!("invalid time of day: {s:?}"))),
            Raw::Minutes(m) => MinuteOfDay::new(m)
                .ok_or_else(|| de::Error::custom(format!("minute offset out of range: {m}"))),
        }
    }
}

/// A recurring schedule entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeBlock {
    pub start: MinuteOfDay,
    pub end: MinuteOfDay,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub description: String,
    /// Tie-break ordinal carried from authored documents. Matching is
    /// first-declared-wins and does not consult this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl TimeBlock {
    /// Wraparound-aware containment: a block whose end precedes its
    /// start crosses midnight (e.g. sleep 23:00-07:00).
    pub fn contains(&self, minute: u16) -> bool {
        let (start, end) = (self.start.get(), self.end.get());
        if end < start {
            minute >= start || minute < end
        } else {
            minute >= start && minute < end
        }
    }
}

/// Daily patterns recur every day; weekly patterns only on their
/// weekday. The weekly map is keyed by lowercase weekday name on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecurringPatterns {
    #[serde(default)]
    pub daily: Vec<TimeBlock>,
    #[serde(default)]
    pub weekly: BTreeMap<String, Vec<TimeBlock>>,
}

impl RecurringPatterns {
    /// Blocks active only on the given weekday.
    pub fn weekly_for(&self, weekday: Weekday) -> &[TimeBlock] {
        self.weekly
            .get(weekday_key(weekday))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

pub(crate) fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// An owner-scoped planner document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planner {
    #[serde(default)]
    pub planner_id: String,
    pub owner: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub recurring_patterns: RecurringPatterns,
}

impl Planner {
    /// Loads the owner's planner template. Absence or a parse failure
    /// is a normal outcome the caller degrades on, not a fatal error.
    pub fn load(paths: &DataPaths, owner: &str) -> Result<Self, PlannerError> {
        let path = paths.planner_file(owner);
        let data = std::fs::read_to_string(&path).map_err(|_| PlannerError::NotFound {
            owner: owner.to_string(),
            path,
        })?;
        serde_json::from_str(&data).map_err(|e| PlannerError::ParseFailed {
            owner: owner.to_string(),
            message: e.to_string(),
        })
    }
}
