//! Year-to-date totals and early-year run-rate projection
//!
//! Early in the calendar year the year-to-date total for a metric is too
//! small to be a useful annual figure, so through the cutoff month it is
//! extrapolated from the monthly run rate. This is a pacing heuristic, not
//! a statistical forecast; callers must surface `is_projected` so
//! estimated figures are visually distinguished from actuals.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::records::DatedAmount;

/// Last month (inclusive) for which run-rate projection applies
pub const DEFAULT_RUN_RATE_CUTOFF_MONTH: u32 = 6;

/// Days assumed per month when computing fractional elapsed months
const PROJECTION_DAYS_PER_MONTH: f64 = 30.0;

/// An annual estimate together with how it was produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Year-end estimate (projected) or year-to-date actual
    pub value: f64,

    /// True when the value is a run-rate extrapolation
    pub is_projected: bool,

    /// Months of the year covered by the underlying data
    pub months_elapsed: f64,
}

/// Sum of record amounts falling in the year of `as_of`
pub fn year_to_date<T: DatedAmount>(records: &[T], as_of: NaiveDate) -> f64 {
    records
        .iter()
        .filter(|r| calendar::in_year(r.date(), as_of.year()))
        .map(|r| r.amount())
        .sum()
}

/// Annual estimate for a dated metric evaluated at `as_of`
///
/// Through `cutoff_month` (inclusive), and only once some year-to-date
/// data exists, the total is scaled to twelve months from the monthly run
/// rate. Afterwards the year-to-date total is returned as-is.
pub fn project_annual<T: DatedAmount>(
    records: &[T],
    as_of: NaiveDate,
    cutoff_month: u32,
) -> Projection {
    let ytd = year_to_date(records, as_of);
    let month = as_of.month();

    if month <= cutoff_month && ytd > 0.0 {
        // Full months elapsed plus the current month's days at ~30
        // days/month. NaiveDate days are 1-based, so the denominator is
        // never zero.
        let months_elapsed =
            (month - 1) as f64 + as_of.day() as f64 / PROJECTION_DAYS_PER_MONTH;
        let monthly_average = ytd / months_elapsed;

        Projection {
            value: monthly_average * 12.0,
            is_projected: true,
            months_elapsed,
        }
    } else {
        Projection {
            value: ytd,
            is_projected: false,
            months_elapsed: month as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Revenue;
    use approx::assert_relative_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn revenue(amount: f64, on: NaiveDate) -> Revenue {
        Revenue::new(1, "Invoice", amount, on, "test")
    }

    #[test]
    fn test_ytd_filters_to_evaluation_year() {
        let records = vec![
            revenue(1000.0, date(2025, 1, 10)),
            revenue(500.0, date(2025, 3, 5)),
            revenue(9999.0, date(2024, 12, 31)),
        ];

        assert_eq!(year_to_date(&records, date(2025, 7, 1)), 1500.0);
    }

    #[test]
    fn test_first_half_projects_from_run_rate() {
        // ytd 1000 evaluated on Feb 15: 1.5 months elapsed, 8000 projected
        let records = vec![revenue(1000.0, date(2025, 1, 20))];
        let projection = project_annual(&records, date(2025, 2, 15), DEFAULT_RUN_RATE_CUTOFF_MONTH);

        assert!(projection.is_projected);
        assert_relative_eq!(projection.months_elapsed, 1.5);
        assert_relative_eq!(projection.value, 8000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_second_half_returns_ytd_exactly() {
        let records = vec![
            revenue(1000.0, date(2025, 2, 1)),
            revenue(2500.0, date(2025, 6, 15)),
        ];
        let projection = project_annual(&records, date(2025, 7, 1), DEFAULT_RUN_RATE_CUTOFF_MONTH);

        assert!(!projection.is_projected);
        assert_eq!(projection.value, 3500.0);
        assert_eq!(projection.months_elapsed, 7.0);
    }

    #[test]
    fn test_no_data_is_never_projected() {
        let records: Vec<Revenue> = Vec::new();
        let projection = project_annual(&records, date(2025, 3, 10), DEFAULT_RUN_RATE_CUTOFF_MONTH);

        assert!(!projection.is_projected);
        assert_eq!(projection.value, 0.0);
        assert_eq!(projection.months_elapsed, 3.0);
    }

    #[test]
    fn test_cutoff_month_boundary() {
        let records = vec![revenue(600.0, date(2025, 1, 5))];

        let june = project_annual(&records, date(2025, 6, 30), DEFAULT_RUN_RATE_CUTOFF_MONTH);
        assert!(june.is_projected);

        let july = project_annual(&records, date(2025, 7, 1), DEFAULT_RUN_RATE_CUTOFF_MONTH);
        assert!(!july.is_projected);
        assert_eq!(july.value, 600.0);
    }
}
