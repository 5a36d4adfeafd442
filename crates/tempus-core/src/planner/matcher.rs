//! Matching an instant against planner patterns.
//!
//! Daily patterns outrank weekly ones; within a list the first declared
//! match wins. Block priority is carried in the data model but not
//! consulted here.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::{BlockKind, Planner, TimeBlock};

/// What the planner says should be happening at one instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMatch {
    pub description: String,
    pub kind: BlockKind,
    pub in_work_window: bool,
    pub expected_downtime: bool,
}

impl ScheduleMatch {
    /// The default when no block contains the instant.
    pub fn unscheduled() -> Self {
        Self {
            description: "Unscheduled time".to_string(),
            kind: BlockKind::Flex,
            in_work_window: false,
            expected_downtime: false,
        }
    }
}

/// The next block starting later today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextActivity {
    pub description: String,
    /// Start time as `HH:MM`.
    pub starts_at: String,
}

fn minute_of(at: DateTime<Utc>) -> u16 {
    (at.hour() * 60 + at.minute()) as u16
}

/// Finds the single block describing what should be happening at `at`.
///
/// Daily blocks of type `work` count as a work window; on the weekly
/// path `commitment` blocks count too -- external obligations are
/// work-equivalent even though they are not tagged `work`.
pub fn match_current_activity(at: DateTime<Utc>, planner: &Planner) -> ScheduleMatch {
    let minute = minute_of(at);
    let patterns = &planner.recurring_patterns;

    for block in &patterns.daily {
        if block.contains(minute) {
            return ScheduleMatch {
                description: block.description.clone(),
                kind: block.kind,
                in_work_window: block.kind == BlockKind::Work,
                expected_downtime: block.kind.is_downtime(),
            };
        }
    }

    for block in patterns.weekly_for(at.weekday()) {
        if block.contains(minute) {
            return ScheduleMatch {
                description: block.description.clone(),
                kind: block.kind,
                in_work_window: matches!(block.kind, BlockKind::Work | BlockKind::Commitment),
                expected_downtime: block.kind.is_downtime(),
            };
        }
    }

    ScheduleMatch::unscheduled()
}

/// The earliest block starting strictly after `at`, among today's daily
/// and weekly patterns. `None` when nothing else is scheduled today.
pub fn next_activity(at: DateTime<Utc>, planner: &Planner) -> Option<NextActivity> {
    let minute = minute_of(at);
    let patterns = &planner.recurring_patterns;

    patterns
        .daily
        .iter()
        .chain(patterns.weekly_for(at.weekday()))
        .filter(|block| block.start.get() > minute)
        .min_by_key(|block| block.start)
        .map(|block: &TimeBlock| NextActivity {
            description: block.description.clone(),
            starts_at: block.start.to_hhmm(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{MinuteOfDay, RecurringPatterns};
    use chrono::TimeZone;

    fn block(start: u16, end: u16, kind: BlockKind, description: &str) -> TimeBlock {
        TimeBlock {
            start: MinuteOfDay::new(start).unwrap(),
            end: MinuteOfDay::new(end).unwrap(),
            kind,
            description: description.to_string(),
            priority: None,
        }
    }

    fn planner(daily: Vec<TimeBlock>, weekly: Vec<(&str, Vec<TimeBlock>)>) -> Planner {
        Planner {
            planner_id: String::new(),
            owner: "seanje".to_string(),
            month: String::new(),
            recurring_patterns: RecurringPatterns {
                daily,
                weekly: weekly
                    .into_iter()
                    .map(|(day, blocks)| (day.to_string(), blocks))
                    .collect(),
            },
        }
    }

    // 2025-11-04 is a Tuesday
    fn tuesday_at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 4, hour, minute, 0).unwrap()
    }

    #[test]
    fn daily_sleep_block_matches_inside_wraparound() {
        let p = planner(
            vec![block(1380, 420, BlockKind::Sleep, "Sleep")],
            Vec::new(),
        );

        for at in [tuesday_at(1, 0), tuesday_at(23, 20)] {
            let m = match_current_activity(at, &p);
            assert_eq!(m.description, "Sleep");
            assert!(m.expected_downtime);
            assert!(!m.in_work_window);
        }

        let noon = match_current_activity(tuesday_at(12, 0), &p);
        assert_eq!(noon.description, "Unscheduled time");
        assert_eq!(noon.kind, BlockKind::Flex);
    }

    #[test]
    fn daily_outranks_weekly_regardless_of_priority() {
        let mut shadowed = block(540, 1020, BlockKind::Commitment, "Day job");
        shadowed.priority = Some("high".to_string());
        let p = planner(
            vec![block(540, 720, BlockKind::Work, "Morning focus")],
            vec![("tuesday", vec![shadowed])],
        );

        let m = match_current_activity(tuesday_at(10, 0), &p);
        assert_eq!(m.description, "Morning focus");
        assert!(m.in_work_window);
    }

    #[test]
    fn first_declared_block_wins_within_a_list() {
        let p = planner(
            vec![
                block(540, 720, BlockKind::Work, "First"),
                block(540, 720, BlockKind::Break, "Second"),
            ],
            Vec::new(),
        );
        assert_eq!(
            match_current_activity(tuesday_at(9, 30), &p).description,
            "First"
        );
    }

    #[test]
    fn weekly_commitment_counts_as_work_window() {
        let p = planner(
            Vec::new(),
            vec![("tuesday", vec![block(540, 1020, BlockKind::Commitment, "Day job")])],
        );

        let m = match_current_activity(tuesday_at(10, 0), &p);
        assert!(m.in_work_window);
        assert!(!m.expected_downtime);

        // same planner, a Wednesday: the tuesday block does not apply
        let wednesday = Utc.with_ymd_and_hms(2025, 11, 5, 10, 0, 0).unwrap();
        let m = match_current_activity(wednesday, &p);
        assert_eq!(m.description, "Unscheduled time");
    }

    #[test]
    fn daily_work_block_is_work_window() {
        let p = planner(vec![block(540, 1020, BlockKind::Work, "Deep work")], Vec::new());
        let m = match_current_activity(tuesday_at(10, 0), &p);
        assert!(m.in_work_window);
        assert!(!m.expected_downtime);
    }

    #[test]
    fn next_activity_skips_started_blocks() {
        let p = planner(
            vec![
                block(480, 540, BlockKind::Meal, "Breakfast"),
                block(720, 780, BlockKind::Meal, "Lunch"),
            ],
            vec![("tuesday", vec![block(600, 660, BlockKind::Break, "Walk")])],
        );

        let next = next_activity(tuesday_at(9, 30), &p).unwrap();
        assert_eq!(next.description, "Walk");
        assert_eq!(next.starts_at, "10:00");

        let next = next_activity(tuesday_at(11, 30), &p).unwrap();
        assert_eq!(next.description, "Lunch");

        assert!(next_activity(tuesday_at(13, 0), &p).is_none());
    }
}
