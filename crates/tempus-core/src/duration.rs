//! Compact human rendering of durations.

use chrono::Duration;

/// Formats a duration using its two largest non-zero units among
/// days, hours, minutes, and seconds: `"45s"`, `"45m30s"`, `"2h15m"`,
/// `"1d3h"`. Display-only and lossy. Zero and negative durations
/// render as `"0s"`.
pub fn format_duration(d: Duration) -> String {
    let total = d.num_seconds().max(0);

    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    let units = [
        (days, "d"),
        (hours, "h"),
        (minutes, "m"),
        (seconds, "s"),
    ];

    let mut out = String::new();
    let mut shown = 0;
    for (value, suffix) in units {
        if value > 0 && shown < 2 {
            out.push_str(&value.to_string());
            out.push_str(suffix);
            shown += 1;
        }
    }

    if out.is_empty() {
        out.push_str("0s");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn seconds_only() {
        assert_eq!(format_duration(Duration::seconds(45)), "45s");
        assert_eq!(format_duration(Duration::seconds(59)), "59s");
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(format_duration(Duration::seconds(45 * 60 + 30)), "45m30s");
    }

    #[test]
    fn hours_and_minutes() {
        assert_eq!(format_duration(Duration::minutes(2 * 60 + 15)), "2h15m");
        assert_eq!(format_duration(Duration::minutes(7 * 60 + 22)), "7h22m");
    }

    #[test]
    fn days_and_hours() {
        assert_eq!(format_duration(Duration::hours(27)), "1d3h");
    }

    #[test]
    fn zero_valued_units_are_skipped() {
        assert_eq!(format_duration(Duration::minutes(45)), "45m");
        assert_eq!(format_duration(Duration::days(1)), "1d");
        // days and minutes with no hours in between
        assert_eq!(
            format_duration(Duration::days(1) + Duration::minutes(5)),
            "1d5m"
        );
    }

    #[test]
    fn zero_and_negative_clamp() {
        assert_eq!(format_duration(Duration::zero()), "0s");
        assert_eq!(format_duration(Duration::seconds(-90)), "0s");
    }

    proptest! {
        #[test]
        fn never_more_than_two_units(secs in 0i64..10_000_000) {
            let rendered = format_duration(Duration::seconds(secs));
            let unit_count = rendered.chars().filter(|c| c.is_ascii_alphabetic()).count();
            prop_assert!(unit_count >= 1 && unit_count <= 2);
        }

        #[test]
        fn sub_minute_renders_exact_seconds(secs in 0i64..60) {
            prop_assert_eq!(format_duration(Duration::seconds(secs)), format!("{secs}s"));
        }
    }
}
