//! Integration tests for session time awareness over real files.

use chrono::{DateTime, TimeZone, Utc};
use tempus_core::{
    ActivityState, DataPaths, FixedClock, TemporalEngine,
};

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 4, hour, minute, 0).unwrap()
}

fn write_session(paths: &DataPaths, session_id: &str, start: DateTime<Utc>) {
    let file = paths.session_file();
    std::fs::create_dir_all(file.parent().unwrap()).unwrap();
    std::fs::write(
        &file,
        serde_json::json!({
            "session_id": session_id,
            "user_id": "seanje",
            "start_time": start.to_rfc3339(),
        })
        .to_string(),
    )
    .unwrap();
}

fn write_activity(paths: &DataPaths, session_id: &str, lines: &[String]) {
    let file = paths.activity_file(session_id);
    std::fs::create_dir_all(file.parent().unwrap()).unwrap();
    std::fs::write(&file, lines.join("\n")).unwrap();
}

fn event_line(ts: DateTime<Utc>, tool: &str) -> String {
    serde_json::json!({"ts": ts.to_rfc3339(), "tool": tool}).to_string()
}

#[test]
fn overnight_session_breaks_down_into_uptime_and_downtime() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::new(dir.path());

    write_session(&paths, "s1", at(0, 15));
    write_activity(&paths, "s1", &[event_line(at(0, 30), "Edit")]);

    let engine = TemporalEngine::new(FixedClock(at(7, 52)), paths);
    let (state, awareness) = engine.time_awareness().unwrap();

    assert_eq!(state.user_id, "seanje");
    assert_eq!(awareness.activity_gaps.len(), 1);
    assert_eq!(awareness.active_uptime().num_minutes(), 15);
    assert_eq!(awareness.semi_downtime().num_minutes(), 7 * 60 + 22);
    assert_eq!(awareness.current_state, ActivityState::SemiDowntime);
}

#[test]
fn missing_activity_log_means_entirely_idle() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::new(dir.path());

    write_session(&paths, "s1", at(9, 0));

    let engine = TemporalEngine::new(FixedClock(at(10, 0)), paths);
    let (_, awareness) = engine.time_awareness().unwrap();

    assert_eq!(awareness.active_uptime_secs, 0);
    assert_eq!(awareness.semi_downtime(), awareness.wall_clock());
    assert_eq!(awareness.current_state, ActivityState::SemiDowntime);
}

#[test]
fn corrupt_log_lines_do_not_change_totals() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::new(dir.path());

    write_session(&paths, "s1", at(9, 0));
    write_activity(
        &paths,
        "s1",
        &[
            event_line(at(9, 0), "Edit"),
            "{truncated".to_string(),
            String::new(),
            event_line(at(9, 55), "Bash"),
            "[\"wrong\", \"shape\"]".to_string(),
            event_line(at(10, 0), "Edit"),
        ],
    );

    let engine = TemporalEngine::new(FixedClock(at(10, 5)), paths);
    let (_, awareness) = engine.time_awareness().unwrap();

    // one 55-minute gap between 09:00 and 09:55
    assert_eq!(awareness.activity_gaps.len(), 1);
    assert_eq!(awareness.activity_gaps[0].duration().num_minutes(), 55);
    assert_eq!(awareness.current_state, ActivityState::Uptime);
}

#[test]
fn missing_session_state_is_an_error_for_awareness() {
    let dir = tempfile::tempdir().unwrap();
    let paths = DataPaths::new(dir.path());
    let engine = TemporalEngine::new(FixedClock(at(10, 0)), paths);
    assert!(engine.time_awareness().is_err());
}
