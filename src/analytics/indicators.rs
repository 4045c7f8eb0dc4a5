//! Snapshot assembly combining annual, monthly, and break-even indicators

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::annualize;
use crate::analytics::break_even;
use crate::analytics::monthly::{self, MonthlyAggregates};
use crate::analytics::projector::{self, Projection};
use crate::engine::EngineConfig;
use crate::records::FinancialRecords;

/// Prior-year totals used as the comparator for growth rates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyBaseline {
    /// Prior-year revenue total
    pub revenues: f64,

    /// Prior-year total costs (fixed plus variable)
    pub total_costs: f64,
}

/// Complete statistics snapshot for dashboard rendering
///
/// Derived in full on every invocation and never partially updated. All
/// ratio fields are percentages and fall back to 0 when the year has no
/// revenue, so an empty dashboard still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    /// Evaluation date the snapshot was computed at
    pub as_of: NaiveDate,

    /// Active fixed costs annualized
    pub annual_fixed_costs: f64,

    /// Annual variable cost estimate, with projection metadata
    pub annual_variable_costs: Projection,

    /// Annual revenue estimate, with projection metadata
    pub annual_revenues: Projection,

    /// Annual fixed plus variable costs
    pub annual_total_costs: f64,

    /// Annual revenues minus annual total costs
    pub annual_net_profit: f64,

    /// Net profit over revenues, percent
    pub annual_profit_margin: f64,

    /// Total costs over revenues, percent
    pub cost_revenue_ratio: f64,

    /// Net profit over total costs, percent
    pub efficiency_ratio: f64,

    /// Annual framing of the fixed-cost break-even threshold
    pub break_even_point: f64,

    /// Current-month aggregates
    pub monthly: MonthlyAggregates,

    /// Revenue needed this month to break even
    pub monthly_break_even: f64,

    /// Estimated days until the month breaks even
    pub days_to_break_even: u32,

    /// Revenue growth vs the prior year, percent. None when no baseline
    /// is available; never synthesized.
    pub revenue_growth_rate: Option<f64>,

    /// Cost growth vs the prior year, percent. None when no baseline is
    /// available; never synthesized.
    pub cost_growth_rate: Option<f64>,
}

fn ratio_pct(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

fn growth_rate(current: f64, prior: f64) -> Option<f64> {
    if prior > 0.0 {
        Some((current - prior) / prior * 100.0)
    } else {
        None
    }
}

/// Assemble the full statistics snapshot from the three record collections
///
/// Pure function of its inputs and the evaluation date; identical inputs
/// produce an identical snapshot.
pub fn compose_snapshot(
    records: &FinancialRecords,
    as_of: NaiveDate,
    baseline: Option<&YearlyBaseline>,
    config: &EngineConfig,
) -> FinancialSnapshot {
    let cutoff = config.run_rate_cutoff_month;

    let annual_fixed_costs = annualize::annual_fixed_costs(&records.fixed_costs);
    let annual_variable_costs = projector::project_annual(&records.variable_costs, as_of, cutoff);
    let annual_revenues = projector::project_annual(&records.revenues, as_of, cutoff);

    let annual_total_costs = annual_fixed_costs + annual_variable_costs.value;
    let annual_net_profit = annual_revenues.value - annual_total_costs;

    let annual_profit_margin = ratio_pct(annual_net_profit, annual_revenues.value);
    let cost_revenue_ratio = ratio_pct(annual_total_costs, annual_revenues.value);
    // Same zero-revenue gate as the other ratios, plus a zero-cost guard
    let efficiency_ratio = if annual_revenues.value > 0.0 {
        ratio_pct(annual_net_profit, annual_total_costs)
    } else {
        0.0
    };

    let monthly = monthly::aggregate_month(
        &records.fixed_costs,
        &records.variable_costs,
        &records.revenues,
        as_of,
    );

    let threshold = if config.break_even_excludes_variable_costs {
        monthly.fixed
    } else {
        monthly.total_costs
    };
    let pacing = break_even::days_to_break_even(threshold, monthly.revenue, as_of);

    let (revenue_growth_rate, cost_growth_rate) = match baseline {
        Some(b) => (
            growth_rate(annual_revenues.value, b.revenues),
            growth_rate(annual_total_costs, b.total_costs),
        ),
        None => (None, None),
    };

    log::debug!(
        "snapshot at {}: revenues {:.2} (projected: {}), costs {:.2}",
        as_of,
        annual_revenues.value,
        annual_revenues.is_projected,
        annual_total_costs
    );

    FinancialSnapshot {
        as_of,
        annual_fixed_costs,
        annual_variable_costs,
        annual_revenues,
        annual_total_costs,
        annual_net_profit,
        annual_profit_margin,
        cost_revenue_ratio,
        efficiency_ratio,
        break_even_point: annual_fixed_costs,
        monthly,
        monthly_break_even: pacing.monthly_break_even,
        days_to_break_even: pacing.days_to_break_even,
        revenue_growth_rate,
        cost_growth_rate,
    }
}
