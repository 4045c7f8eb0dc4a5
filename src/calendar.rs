//! Calendar helpers for month bucketing and day counts
//!
//! Every date filter in the engine goes through `in_month`/`in_year`, so
//! the bucketing rule (a record counts toward the calendar month and year
//! its date falls in) is defined exactly once.

use chrono::{Datelike, NaiveDate};

/// Check whether a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in a calendar month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    const DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Whether `date` falls in the given calendar month and year
pub fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}

/// Whether `date` falls in the given calendar year
pub fn in_year(date: NaiveDate, year: i32) -> bool {
    date.year() == year
}

/// The calendar month preceding (year, month)
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Last day of the given month
pub fn end_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))
        .expect("day from month-length table is valid")
}
