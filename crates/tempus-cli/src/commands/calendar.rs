use chrono::{Datelike, NaiveDate};
use clap::Subcommand;
use tempus_core::calendar::{generate_calendar, get_date_info, get_month_info};
use tempus_core::{Clock, Config, DataPaths, SystemClock};

use super::CommandError;

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Generate base calendar data for one or more years
    Generate {
        /// Year to generate (e.g. 2025)
        #[arg(long)]
        year: Option<i32>,
        /// Comma-separated years (e.g. 2025,2026)
        #[arg(long)]
        years: Option<String>,
        /// Write one file per month instead of a single year file
        #[arg(long)]
        monthly: bool,
    },
    /// Look up date and month facts from the generated calendar
    Query {
        /// Date to query (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CalendarAction) -> Result<(), CommandError> {
    let paths = DataPaths::discover()?;

    match action {
        CalendarAction::Generate {
            year,
            years,
            monthly,
        } => {
            let years = parse_years(year, years)?;
            let config = Config::load_or_default(&paths);
            let today = SystemClock.now().date_naive();

            for y in years {
                generate_calendar(&paths, &config, y, monthly, today)
                    .map_err(|e| CommandError::failure(format!("generating {y} calendar: {e}")))?;
                if monthly {
                    println!("generated {y} calendar (12 monthly files)");
                } else {
                    println!("generated {y} calendar");
                }
            }
        }
        CalendarAction::Query { date, json } => {
            let date = match date {
                Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map_err(|_| CommandError::usage(format!("invalid date: {s}")))?,
                None => SystemClock.now().date_naive(),
            };

            let date_info = get_date_info(&paths, date.year(), date.month(), date.day())?;
            let month_info = get_month_info(&paths, date.year(), date.month())?;

            if json {
                let out = serde_json::json!({
                    "date": date_info,
                    "month": month_info,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{} ({})", date_info.date, date_info.weekday);
                println!("  week {} of {}", date_info.week_number, date.year());
                println!(
                    "  {} day {} of {}",
                    month_info.name, date_info.day, month_info.days_in_month
                );
                if date_info.is_weekend {
                    println!("  weekend");
                }
                if let Some(name) = &date_info.holiday_name {
                    println!("  holiday: {name}");
                }
            }
        }
    }
    Ok(())
}

fn parse_years(year: Option<i32>, years: Option<String>) -> Result<Vec<i32>, CommandError> {
    if let Some(list) = years {
        let mut parsed = Vec::new();
        for part in list.split(',') {
            let part = part.trim();
            parsed.push(
                part.parse::<i32>()
                    .map_err(|_| CommandError::usage(format!("invalid year: {part}")))?,
            );
        }
        Ok(parsed)
    } else if let Some(y) = year {
        Ok(vec![y])
    } else {
        Err(CommandError::usage("must specify --year or --years"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_years_single() {
        assert_eq!(parse_years(Some(2025), None).unwrap(), vec![2025]);
    }

    #[test]
    fn parse_years_list() {
        assert_eq!(
            parse_years(None, Some("2025, 2026".to_string())).unwrap(),
            vec![2025, 2026]
        );
    }

    #[test]
    fn parse_years_rejects_garbage() {
        let err = parse_years(None, Some("2025,20x6".to_string())).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn parse_years_requires_a_flag() {
        let err = parse_years(None, None).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
