use tempus_core::temporal::TemporalContext;
use tempus_core::{DataPaths, SystemClock, TemporalEngine};

use super::CommandError;

pub fn run(json: bool) -> Result<(), CommandError> {
    let paths = DataPaths::discover()?;
    let engine = TemporalEngine::new(SystemClock, paths);
    let ctx = engine.temporal_context();

    if json {
        println!("{}", serde_json::to_string_pretty(&ctx)?);
        return Ok(());
    }

    print!("{}", render(&ctx));
    Ok(())
}

fn render(ctx: &TemporalContext) -> String {
    let mut out = String::new();

    out.push_str("Temporal Context\n");
    out.push_str("----------------\n");

    let ext = &ctx.external_time;
    out.push_str(&format!(
        "external time:     {} ({}, {} phase)\n",
        ext.formatted, ext.time_of_day, ext.circadian_phase
    ));

    match &ctx.internal_time {
        Some(internal) => out.push_str(&format!(
            "internal time:     {} into session ({})\n",
            internal.elapsed_formatted, internal.session_phase
        )),
        None => out.push_str("internal time:     unavailable (no session)\n"),
    }

    match &ctx.internal_schedule {
        Some(schedule) => {
            out.push_str(&format!(
                "internal schedule: {} ({})\n",
                schedule.current_activity, schedule.activity_kind
            ));
            if schedule.in_work_window {
                out.push_str("  in work window\n");
            }
            if schedule.expected_downtime {
                out.push_str("  expected downtime\n");
            }
            if let (Some(next), Some(time)) =
                (&schedule.next_activity, &schedule.next_activity_time)
            {
                out.push_str(&format!("  next: {next} at {time}\n"));
            }
        }
        None => out.push_str("internal schedule: unavailable (no planner)\n"),
    }

    match &ctx.external_calendar {
        Some(cal) => {
            out.push_str(&format!(
                "external calendar: {} {} {}, week {}\n",
                cal.day_of_week, cal.month_name, cal.day_of_month, cal.week_number
            ));
            if let Some(holiday) = &cal.holiday_name {
                out.push_str(&format!("  holiday: {holiday}\n"));
            }
        }
        None => out.push_str("external calendar: unavailable (not generated)\n"),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempus_core::temporal::ExternalTime;

    #[test]
    fn render_marks_degraded_dimensions() {
        let ctx = TemporalContext {
            external_time: ExternalTime::at(
                Utc.with_ymd_and_hms(2025, 11, 4, 10, 0, 0).unwrap(),
            ),
            internal_time: None,
            internal_schedule: None,
            external_calendar: None,
        };

        let text = render(&ctx);
        assert!(text.contains("internal time:     unavailable"));
        assert!(text.contains("internal schedule: unavailable"));
        assert!(text.contains("external calendar: unavailable"));
        assert!(text.contains("Tue Nov 04, 2025"));
    }
}
