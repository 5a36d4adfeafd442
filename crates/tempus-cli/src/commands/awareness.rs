use tempus_core::{
    classify_gap, format_duration, ActivityState, DataPaths, Planner, SystemClock, TemporalEngine,
    TimeAwareness,
};

use super::CommandError;

/// How many idle periods the human report lists before truncating.
const MAX_GAPS_SHOWN: usize = 5;

pub fn run(json: bool) -> Result<(), CommandError> {
    let paths = DataPaths::discover()?;
    let engine = TemporalEngine::new(SystemClock, paths);

    let (state, awareness) = engine.time_awareness()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&awareness)?);
        return Ok(());
    }

    // Planner is optional here; without it gaps just go unclassified.
    let planner = Planner::load(engine.paths(), &state.user_id).ok();
    print!("{}", render(&awareness, &state.start_formatted, planner.as_ref()));
    Ok(())
}

fn render(
    awareness: &TimeAwareness,
    session_started: &str,
    planner: Option<&Planner>,
) -> String {
    let mut out = String::new();

    out.push_str("Session Time Awareness\n");
    out.push_str("----------------------\n");
    out.push_str(&format!(
        "wall-clock elapsed:  {}\n",
        format_duration(awareness.wall_clock())
    ));
    if !session_started.is_empty() {
        out.push_str(&format!("  session started: {session_started}\n"));
    }
    out.push_str(&format!(
        "active uptime:       {} ({:.0}%)\n",
        format_duration(awareness.active_uptime()),
        awareness.uptime_percent()
    ));
    out.push_str(&format!(
        "semi-downtime:       {} ({:.0}%)\n",
        format_duration(awareness.semi_downtime()),
        awareness.downtime_percent()
    ));

    let state_text = match awareness.current_state {
        ActivityState::Uptime => "uptime (actively working)",
        ActivityState::SemiDowntime => "semi-downtime (idle)",
    };
    out.push_str(&format!("current state:       {state_text}\n"));
    out.push_str(&format!(
        "  last activity: {}\n",
        awareness.last_activity.format("%H:%M:%S")
    ));

    if !awareness.activity_gaps.is_empty() {
        out.push_str(&format!(
            "\nidle periods: {} gap(s) detected\n",
            awareness.activity_gaps.len()
        ));
        for (i, gap) in awareness.activity_gaps.iter().take(MAX_GAPS_SHOWN).enumerate() {
            let classification = classify_gap(gap.start, planner);
            let label = match classification.reason {
                Some(reason) => format!("expected: {reason}"),
                None => "unexpected downtime".to_string(),
            };
            out.push_str(&format!(
                "  {}. {} ({}) {}\n",
                i + 1,
                gap.start.format("%H:%M"),
                format_duration(gap.duration()),
                label
            ));
        }
        if awareness.activity_gaps.len() > MAX_GAPS_SHOWN {
            out.push_str(&format!(
                "  ... and {} more\n",
                awareness.activity_gaps.len() - MAX_GAPS_SHOWN
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempus_core::{ActivityEvent, AwarenessAnalyzer};

    #[test]
    fn render_lists_gaps_with_classification() {
        let start = Utc.with_ymd_and_hms(2025, 11, 4, 0, 15, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 11, 4, 7, 52, 0).unwrap();
        let events = [ActivityEvent {
            ts: Utc
                .with_ymd_and_hms(2025, 11, 4, 0, 30, 0)
                .unwrap()
                .to_rfc3339(),
            tool: "Edit".to_string(),
        }];

        let awareness = AwarenessAnalyzer::new().analyze(start, &events, now);
        let text = render(&awareness, "", None);

        assert!(text.contains("wall-clock elapsed:  7h37m"));
        assert!(text.contains("active uptime:       15m (3%)"));
        assert!(text.contains("semi-downtime:       7h22m (97%)"));
        assert!(text.contains("semi-downtime (idle)"));
        assert!(text.contains("1. 00:30 (7h22m) unexpected downtime"));
    }
}
