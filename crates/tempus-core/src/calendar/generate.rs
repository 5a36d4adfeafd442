//! One-shot base calendar generation.
//!
//! Enumerates every date of a year, computes weekday/week/holiday/month
//! metadata, and persists the result as a single year file or twelve
//! monthly files. This is a batch generator: a write failure is fatal
//! for the invocation and is not retried.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use super::{date_info_for, days_in_year, month_info, Calendar, CalendarMetadata};
use crate::config::Config;
use crate::error::{CalendarError, Result};
use crate::paths::DataPaths;

/// Years the generator accepts. Wide enough for any schedule this
/// system will see; rejects obviously mistyped input.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1970..=9999;

/// Builds the in-memory calendar for a year. Pure given `created`.
pub fn build_calendar(year: i32, config: &Config, created: NaiveDate) -> Result<Calendar, CalendarError> {
    if !YEAR_RANGE.contains(&year) {
        return Err(CalendarError::InvalidYear(year));
    }

    let total_days = days_in_year(year);
    let mut calendar = Calendar {
        year,
        metadata: CalendarMetadata {
            created: created.format("%Y-%m-%d").to_string(),
            timezone: config.calendar.timezone.clone(),
            observes_holidays: config.calendar.observes_holidays.clone(),
            total_days,
        },
        dates: BTreeMap::new(),
        months: BTreeMap::new(),
    };

    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::InvalidYear(year))?;
    for d in 0..total_days {
        let date = start + Duration::days(d as i64);
        let info = date_info_for(date);
        calendar.dates.insert(info.date.clone(), info);
    }

    for month in 1..=12 {
        calendar.months.insert(month, month_info(year, month)?);
    }

    Ok(calendar)
}

/// Generates and persists the base calendar for `year`.
///
/// With `monthly`, writes twelve `<year>/<mm>-<monthname>.json` files,
/// each restricted to its month's dates; otherwise one `<year>.json`.
pub fn generate_calendar(
    paths: &DataPaths,
    config: &Config,
    year: i32,
    monthly: bool,
    created: NaiveDate,
) -> Result<()> {
    let calendar = build_calendar(year, config, created)?;
    if monthly {
        save_calendar_monthly(paths, &calendar)?;
    } else {
        save_calendar(paths, &calendar)?;
    }
    Ok(())
}

fn write_json(path: std::path::PathBuf, calendar: &Calendar) -> Result<(), CalendarError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| CalendarError::WriteFailed {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let data =
        serde_json::to_string_pretty(calendar).map_err(|e| CalendarError::WriteFailed {
            path: path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;
    std::fs::write(&path, data).map_err(|source| CalendarError::WriteFailed { path, source })
}

fn save_calendar(paths: &DataPaths, calendar: &Calendar) -> Result<(), CalendarError> {
    write_json(paths.year_calendar_file(calendar.year), calendar)
}

fn save_calendar_monthly(paths: &DataPaths, calendar: &Calendar) -> Result<(), CalendarError> {
    for month in 1..=12u32 {
        let month_info = calendar
            .months
            .get(&month)
            .ok_or(CalendarError::MonthNotFound(month))?;

        let mut month_calendar = Calendar {
            year: calendar.year,
            metadata: CalendarMetadata {
                total_days: month_info.days_in_month,
                ..calendar.metadata.clone()
            },
            dates: BTreeMap::new(),
            months: BTreeMap::new(),
        };
        month_calendar.months.insert(month, month_info.clone());
        for (date, info) in &calendar.dates {
            if info.month == month {
                month_calendar.dates.insert(date.clone(), info.clone());
            }
        }

        write_json(
            paths.month_calendar_file(calendar.year, month),
            &month_calendar,
        )?;
    }
    Ok(())
}
