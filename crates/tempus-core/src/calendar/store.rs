//! Read access to persisted base calendars.
//!
//! Lookup prefers the monthly layout and falls back to the year file,
//! so either `calendar generate --year N` or `--year N --monthly`
//! satisfies readers.

use std::io;
use std::path::Path;

use super::{Calendar, DateInfo, MonthInfo};
use crate::error::CalendarError;
use crate::paths::DataPaths;

fn read_calendar(path: &Path, year: i32) -> Result<Calendar, CalendarError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CalendarError::NotGenerated {
                year,
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(CalendarError::ParseFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    };
    serde_json::from_str(&data).map_err(|e| CalendarError::ParseFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Loads the single-file calendar for a year.
pub fn load_year_calendar(paths: &DataPaths, year: i32) -> Result<Calendar, CalendarError> {
    read_calendar(&paths.year_calendar_file(year), year)
}

/// Loads calendar data covering `month` of `year`: the month file when
/// present, otherwise the year file.
pub fn load_month_calendar(
    paths: &DataPaths,
    year: i32,
    month: u32,
) -> Result<Calendar, CalendarError> {
    match read_calendar(&paths.month_calendar_file(year, month), year) {
        Ok(cal) => Ok(cal),
        Err(CalendarError::NotGenerated { .. }) => load_year_calendar(paths, year),
        Err(e) => Err(e),
    }
}

/// Looks up the generated facts for a specific date.
pub fn get_date_info(
    paths: &DataPaths,
    year: i32,
    month: u32,
    day: u32,
) -> Result<DateInfo, CalendarError> {
    let cal = load_month_calendar(paths, year, month)?;
    let date = format!("{year:04}-{month:02}-{day:02}");
    cal.dates
        .get(&date)
        .cloned()
        .ok_or(CalendarError::DateNotFound(date))
}

/// Looks up the generated facts for a specific month.
pub fn get_month_info(paths: &DataPaths, year: i32, month: u32) -> Result<MonthInfo, CalendarError> {
    let cal = load_month_calendar(paths, year, month)?;
    cal.months
        .get(&month)
        .cloned()
        .ok_or(CalendarError::MonthNotFound(month))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::generate_calendar;
    use crate::config::Config;
    use chrono::NaiveDate;

    fn created() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 4).unwrap()
    }

    #[test]
    fn missing_calendar_is_not_generated() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());
        assert!(matches!(
            get_date_info(&paths, 2025, 11, 4),
            Err(CalendarError::NotGenerated { year: 2025, .. })
        ));
    }

    #[test]
    fn year_file_serves_date_and_month_lookups() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());
        generate_calendar(&paths, &Config::default(), 2025, false, created()).unwrap();

        let date = get_date_info(&paths, 2025, 11, 4).unwrap();
        assert_eq!(date.weekday, "Tuesday");
        assert_eq!(date.week_number, 45);

        let month = get_month_info(&paths, 2025, 11).unwrap();
        assert_eq!(month.name, "November");
        assert_eq!(month.days_in_month, 30);
    }

    #[test]
    fn month_files_preferred_over_year_file() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());
        generate_calendar(&paths, &Config::default(), 2025, true, created()).unwrap();

        let cal = load_month_calendar(&paths, 2025, 2).unwrap();
        assert_eq!(cal.dates.len(), 28);

        let date = get_date_info(&paths, 2025, 2, 17).unwrap();
        assert!(date.is_holiday);
        assert_eq!(date.holiday_name.as_deref(), Some("Presidents' Day"));
    }

    #[test]
    fn date_absent_from_document() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());
        generate_calendar(&paths, &Config::default(), 2025, false, created()).unwrap();
        // 2025 file cannot answer for a different year's dates
        assert!(matches!(
            get_date_info(&paths, 2026, 1, 1),
            Err(CalendarError::NotGenerated { year: 2026, .. })
        ));
    }
}
