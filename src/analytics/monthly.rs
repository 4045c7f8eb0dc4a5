//! Current-month cost and revenue aggregation

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::analytics::annualize;
use crate::calendar;
use crate::records::{DatedAmount, FixedCost, Revenue, VariableCost};

/// Cost and revenue totals for a single calendar month
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregates {
    /// Active fixed costs normalized to one month
    pub fixed: f64,

    /// Variable costs dated in the month
    pub variable: f64,

    /// Fixed plus variable costs
    pub total_costs: f64,

    /// Revenues dated in the month
    pub revenue: f64,
}

/// Sum of dated amounts falling in the given calendar month
fn month_total<T: DatedAmount>(records: &[T], year: i32, month: u32) -> f64 {
    records
        .iter()
        .filter(|r| calendar::in_month(r.date(), year, month))
        .map(|r| r.amount())
        .sum()
}

/// Aggregate costs and revenue for the calendar month containing `as_of`
pub fn aggregate_month(
    fixed_costs: &[FixedCost],
    variable_costs: &[VariableCost],
    revenues: &[Revenue],
    as_of: NaiveDate,
) -> MonthlyAggregates {
    let year = as_of.year();
    let month = as_of.month();

    let fixed = annualize::monthly_fixed_costs(fixed_costs);
    let variable = month_total(variable_costs, year, month);
    let revenue = month_total(revenues, year, month);

    MonthlyAggregates {
        fixed,
        variable,
        total_costs: fixed + variable,
        revenue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Frequency;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_aggregate_month_buckets_by_date() {
        let fixed = vec![
            FixedCost::new(1, "Rent", 1200.0, Frequency::Monthly, true, "facilities"),
            FixedCost::new(2, "Old licence", 99.0, Frequency::Monthly, false, "it"),
        ];
        let variable = vec![
            VariableCost::new(1, "Materials", 400.0, date(2025, 3, 5), "materials"),
            VariableCost::new(2, "Courier", 60.0, date(2025, 3, 28), "logistics"),
            VariableCost::new(3, "Materials", 500.0, date(2025, 2, 5), "materials"),
        ];
        let revenues = vec![
            Revenue::new(1, "Invoice 7", 2000.0, date(2025, 3, 12), "Acme"),
            Revenue::new(2, "Invoice 6", 1500.0, date(2025, 2, 12), "Acme"),
            Revenue::new(3, "Invoice 7b", 800.0, date(2024, 3, 12), "Acme"),
        ];

        let aggregates = aggregate_month(&fixed, &variable, &revenues, date(2025, 3, 15));

        assert_eq!(aggregates.fixed, 1200.0);
        assert_eq!(aggregates.variable, 460.0);
        assert_eq!(aggregates.total_costs, 1660.0);
        assert_eq!(aggregates.revenue, 2000.0);
    }

    #[test]
    fn test_empty_month_is_all_zero() {
        let aggregates = aggregate_month(&[], &[], &[], date(2025, 5, 1));
        assert_eq!(aggregates, MonthlyAggregates::default());
    }
}
