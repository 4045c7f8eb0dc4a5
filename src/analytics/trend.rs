//! Recent-months aggregation for dashboard charts

use chrono::{Datelike, NaiveDate};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analytics::monthly::{self, MonthlyAggregates};
use crate::calendar;
use crate::records::FinancialRecords;

/// One month of aggregated history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,

    /// Calendar month, 1-12
    pub month: u32,

    /// Cost and revenue totals for the month
    pub aggregates: MonthlyAggregates,

    /// Revenue minus total costs for the month
    pub net: f64,
}

/// Aggregates for the `months_back` months ending at the month of `as_of`
///
/// Points are ordered oldest first. Each month is evaluated at its last
/// day so the whole month's records are included.
pub fn monthly_trend(
    records: &FinancialRecords,
    as_of: NaiveDate,
    months_back: u32,
) -> Vec<TrendPoint> {
    let mut months = Vec::with_capacity(months_back as usize);
    let mut year = as_of.year();
    let mut month = as_of.month();

    for _ in 0..months_back {
        months.push((year, month));
        let prev = calendar::previous_month(year, month);
        year = prev.0;
        month = prev.1;
    }
    months.reverse();

    months
        .par_iter()
        .map(|&(year, month)| {
            let end_of_month = calendar::end_of_month(year, month);
            let aggregates = monthly::aggregate_month(
                &records.fixed_costs,
                &records.variable_costs,
                &records.revenues,
                end_of_month,
            );

            TrendPoint {
                year,
                month,
                aggregates,
                net: aggregates.revenue - aggregates.total_costs,
            }
        })
        .collect()
}
