//! Static U.S. federal holiday tables.
//!
//! Membership is a year-keyed lookup over the supported years; dates in
//! other years are simply non-holidays. Known limitation: the table must
//! be extended by hand as years are added.

/// Dated holidays for one supported year.
pub fn holidays_for_year(year: i32) -> &'static [(&'static str, &'static str)] {
    match year {
        2025 => HOLIDAYS_2025,
        2026 => HOLIDAYS_2026,
        _ => &[],
    }
}

/// Holiday name for a `YYYY-MM-DD` date string, if any.
pub fn holiday_name(date: &str) -> Option<&'static str> {
    let year: i32 = date.get(..4)?.parse().ok()?;
    holidays_for_year(year)
        .iter()
        .find(|(d, _)| *d == date)
        .map(|(_, name)| *name)
}

const HOLIDAYS_2025: &[(&str, &str)] = &[
    ("2025-01-01", "New Year's Day"),
    ("2025-01-20", "Martin Luther King Jr. Day"),
    ("2025-02-17", "Presidents' Day"),
    ("2025-05-26", "Memorial Day"),
    ("2025-07-04", "Independence Day"),
    ("2025-09-01", "Labor Day"),
    ("2025-10-13", "Columbus Day"),
    ("2025-11-11", "Veterans Day"),
    ("2025-11-27", "Thanksgiving Day"),
    ("2025-12-25", "Christmas Day"),
];

const HOLIDAYS_2026: &[(&str, &str)] = &[
    ("2026-01-01", "New Year's Day"),
    ("2026-01-19", "Martin Luther King Jr. Day"),
    ("2026-02-16", "Presidents' Day"),
    ("2026-05-25", "Memorial Day"),
    // July 4 falls on a Saturday in 2026
    ("2026-07-03", "Independence Day (Observed)"),
    ("2026-07-04", "Independence Day"),
    ("2026-09-07", "Labor Day"),
    ("2026-10-12", "Columbus Day"),
    ("2026-11-11", "Veterans Day"),
    ("2026-11-26", "Thanksgiving Day"),
    ("2026-12-25", "Christmas Day"),
];
