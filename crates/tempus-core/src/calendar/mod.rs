//! Base calendar: immutable date facts shared by every schedule consumer.
//!
//! The base calendar is generated once per year and persisted as JSON
//! (one year file, or twelve month files). Readers treat it as the
//! external-calendar dimension: weekday, ISO week number, weekend and
//! holiday membership for any date.

pub mod generate;
pub mod holidays;
pub mod store;

pub use generate::generate_calendar;
pub use store::{get_date_info, get_month_info, load_month_calendar, load_year_calendar};

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// One generated calendar document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    pub year: i32,
    pub metadata: CalendarMetadata,
    pub dates: BTreeMap<String, DateInfo>,
    pub months: BTreeMap<u32, MonthInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarMetadata {
    pub created: String,
    pub timezone: String,
    pub observes_holidays: Vec<String>,
    pub total_days: u32,
}

/// Facts about a single date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateInfo {
    pub date: String,
    pub weekday: String,
    pub week_number: u32,
    pub month: u32,
    pub day: u32,
    pub is_weekend: bool,
    pub is_holiday: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
}

/// Facts about a month of a year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthInfo {
    pub month: u32,
    pub name: String,
    pub days_in_month: u32,
    pub first_day: String,
    pub last_day: String,
    pub first_weekday: String,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English month name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Standard Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Pure date facts for one day of the proleptic Gregorian calendar.
///
/// Holiday membership comes from the static year-keyed table in
/// [`holidays`]; dates outside the table are simply non-holidays.
pub fn date_info(year: i32, month: u32, day: u32) -> Result<DateInfo, CalendarError> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })?;
    Ok(date_info_for(date))
}

pub(crate) fn date_info_for(date: NaiveDate) -> DateInfo {
    let date_str = date.format("%Y-%m-%d").to_string();
    let weekday = date.weekday();
    let holiday_name = holidays::holiday_name(&date_str).map(str::to_owned);

    DateInfo {
        date: date_str,
        weekday: weekday_name(weekday).to_string(),
        week_number: date.iso_week().week(),
        month: date.month(),
        day: date.day(),
        is_weekend: weekday == Weekday::Sat || weekday == Weekday::Sun,
        is_holiday: holiday_name.is_some(),
        holiday_name,
    }
}

/// Pure month facts: name, length, first/last day.
pub fn month_info(year: i32, month: u32) -> Result<MonthInfo, CalendarError> {
    let name = month_name(month).ok_or(CalendarError::MonthNotFound(month))?;
    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalendarError::InvalidDate { year, month, day: 1 })?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(CalendarError::InvalidYear(year))?;
    let last_day = next_month - Duration::days(1);

    Ok(MonthInfo {
        month,
        name: name.to_string(),
        days_in_month: last_day.day(),
        first_day: first_day.format("%Y-%m-%d").to_string(),
        last_day: last_day.format("%Y-%m-%d").to_string(),
        first_weekday: weekday_name(first_day.weekday()).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2025), 365);
    }

    #[test]
    fn date_info_known_day() {
        let info = date_info(2025, 11, 4).unwrap();
        assert_eq!(info.weekday, "Tuesday");
        assert_eq!(info.week_number, 45);
        assert!(!info.is_weekend);
        assert!(!info.is_holiday);
    }

    #[test]
    fn date_info_holiday_and_weekend() {
        let christmas = date_info(2025, 12, 25).unwrap();
        assert!(christmas.is_holiday);
        assert_eq!(christmas.holiday_name.as_deref(), Some("Christmas Day"));

        let saturday = date_info(2025, 11, 8).unwrap();
        assert!(saturday.is_weekend);
    }

    #[test]
    fn date_info_rejects_bad_dates() {
        assert!(date_info(2025, 2, 30).is_err());
        assert!(date_info(2025, 13, 1).is_err());
    }

    #[test]
    fn month_info_lengths() {
        assert_eq!(month_info(2025, 2).unwrap().days_in_month, 28);
        assert_eq!(month_info(2024, 2).unwrap().days_in_month, 29);
        assert_eq!(month_info(2025, 12).unwrap().days_in_month, 31);

        let november = month_info(2025, 11).unwrap();
        assert_eq!(november.name, "November");
        assert_eq!(november.first_day, "2025-11-01");
        assert_eq!(november.last_day, "2025-11-30");
        assert_eq!(november.first_weekday, "Saturday");
    }

    proptest! {
        #[test]
        fn year_length_matches_leap_rule(year in 1900i32..2400) {
            let expected = if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                366
            } else {
                365
            };
            prop_assert_eq!(days_in_year(year), expected);
        }

        #[test]
        fn month_lengths_sum_to_year(year in 1900i32..2400) {
            let total: u32 = (1..=12)
                .map(|m| month_info(year, m).unwrap().days_in_month)
                .sum();
            prop_assert_eq!(total, days_in_year(year));
        }
    }
}
