//! Configured entry point for snapshot and trend computation
//!
//! Bundles the composition policies with thin delegation to the pure
//! analytics functions, so callers configure once and then compute for
//! whatever records and dates arrive.

use chrono::NaiveDate;

use crate::analytics::indicators::{compose_snapshot, FinancialSnapshot, YearlyBaseline};
use crate::analytics::monthly::{self, MonthlyAggregates};
use crate::analytics::projector::DEFAULT_RUN_RATE_CUTOFF_MONTH;
use crate::analytics::trend::{monthly_trend, TrendPoint};
use crate::records::FinancialRecords;

/// Policy knobs for snapshot composition
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Last month (inclusive) in which annual figures are projected from
    /// the monthly run rate
    pub run_rate_cutoff_month: u32,

    /// Whether the monthly break-even threshold is fixed costs alone.
    /// Variable costs are treated as scaling with revenue and excluded
    /// from the threshold; a simplification kept visible here so it can
    /// be revisited.
    pub break_even_excludes_variable_costs: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            run_rate_cutoff_month: DEFAULT_RUN_RATE_CUTOFF_MONTH,
            break_even_excludes_variable_costs: true,
        }
    }
}

/// Analytics facade holding the composition policies
///
/// # Example
/// ```ignore
/// let engine = AnalyticsEngine::new();
/// let snapshot = engine.snapshot(&records, as_of);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    config: EngineConfig,
}

impl AnalyticsEngine {
    /// Create an engine with default policies
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Create an engine with specific policies
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Full statistics snapshot at `as_of`
    pub fn snapshot(&self, records: &FinancialRecords, as_of: NaiveDate) -> FinancialSnapshot {
        compose_snapshot(records, as_of, None, &self.config)
    }

    /// Snapshot with prior-year totals so growth rates are available
    pub fn snapshot_with_baseline(
        &self,
        records: &FinancialRecords,
        as_of: NaiveDate,
        baseline: &YearlyBaseline,
    ) -> FinancialSnapshot {
        compose_snapshot(records, as_of, Some(baseline), &self.config)
    }

    /// Current-month aggregates only
    pub fn monthly(&self, records: &FinancialRecords, as_of: NaiveDate) -> MonthlyAggregates {
        monthly::aggregate_month(
            &records.fixed_costs,
            &records.variable_costs,
            &records.revenues,
            as_of,
        )
    }

    /// Month-by-month history for charts, oldest first
    pub fn trend(
        &self,
        records: &FinancialRecords,
        as_of: NaiveDate,
        months_back: u32,
    ) -> Vec<TrendPoint> {
        monthly_trend(records, as_of, months_back)
    }

    /// Get reference to the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{FixedCost, Frequency, Revenue};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn records() -> FinancialRecords {
        FinancialRecords::new(
            vec![FixedCost::new(
                1,
                "Rent",
                1500.0,
                Frequency::Monthly,
                true,
                "facilities",
            )],
            Vec::new(),
            vec![Revenue::new(
                1,
                "Invoice 9",
                4000.0,
                date(2025, 9, 5),
                "Acme",
            )],
        )
    }

    #[test]
    fn test_engine_delegates_to_composer() {
        let engine = AnalyticsEngine::new();
        let snapshot = engine.snapshot(&records(), date(2025, 9, 10));

        assert_eq!(snapshot.annual_fixed_costs, 18_000.0);
        assert_eq!(snapshot.monthly_break_even, 1500.0);
        assert_eq!(snapshot.revenue_growth_rate, None);
    }

    #[test]
    fn test_engine_baseline_enables_growth_rates() {
        let engine = AnalyticsEngine::new();
        let baseline = YearlyBaseline {
            revenues: 2000.0,
            total_costs: 18_000.0,
        };
        let snapshot = engine.snapshot_with_baseline(&records(), date(2025, 9, 10), &baseline);

        assert!(snapshot.revenue_growth_rate.is_some());
        assert!(snapshot.cost_growth_rate.is_some());
    }

    #[test]
    fn test_engine_trend_and_monthly_agree() {
        let engine = AnalyticsEngine::new();
        let recs = records();
        let as_of = date(2025, 9, 30);

        let monthly = engine.monthly(&recs, as_of);
        let trend = engine.trend(&recs, as_of, 1);

        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].aggregates, monthly);
    }
}
