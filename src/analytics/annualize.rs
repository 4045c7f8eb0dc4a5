//! Frequency normalization for recurring fixed costs
//!
//! Converts a cost recorded at any recurrence frequency into its annual
//! and monthly equivalents.

use crate::records::{FixedCost, Frequency};

/// Average weeks per month used by the monthly normalization
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Average days per month used by the monthly normalization
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Occurrences per year for a recurrence frequency
pub fn annual_multiplier(frequency: Frequency) -> f64 {
    match frequency {
        Frequency::Daily => 365.0,
        Frequency::Weekly => 52.0,
        Frequency::Monthly => 12.0,
        Frequency::Quarterly => 4.0,
        Frequency::Yearly => 1.0,
    }
}

/// Occurrences per month for a recurrence frequency
///
/// Daily and weekly use calendar-average approximations; quarterly and
/// yearly amounts spread evenly across the months they cover.
pub fn monthly_multiplier(frequency: Frequency) -> f64 {
    match frequency {
        Frequency::Daily => DAYS_PER_MONTH,
        Frequency::Weekly => WEEKS_PER_MONTH,
        Frequency::Monthly => 1.0,
        Frequency::Quarterly => 1.0 / 3.0,
        Frequency::Yearly => 1.0 / 12.0,
    }
}

/// Annualized value of a single fixed cost
pub fn annualized(cost: &FixedCost) -> f64 {
    cost.amount * annual_multiplier(cost.frequency)
}

/// Monthly-normalized value of a single fixed cost
pub fn monthly_normalized(cost: &FixedCost) -> f64 {
    cost.amount * monthly_multiplier(cost.frequency)
}

/// Total annualized fixed costs across active records
///
/// Inactive costs are filtered here, once. The per-record helpers above do
/// not inspect `is_active`; every aggregate in the crate goes through this
/// function or `monthly_fixed_costs`.
pub fn annual_fixed_costs(costs: &[FixedCost]) -> f64 {
    costs
        .iter()
        .filter(|c| c.is_active)
        .map(|c| annualized(c))
        .sum()
}

/// Total monthly-normalized fixed costs across active records
pub fn monthly_fixed_costs(costs: &[FixedCost]) -> f64 {
    costs
        .iter()
        .filter(|c| c.is_active)
        .map(|c| monthly_normalized(c))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cost(amount: f64, frequency: Frequency, is_active: bool) -> FixedCost {
        FixedCost::new(1, "Test cost", amount, frequency, is_active, "test")
    }

    #[test]
    fn test_annual_multipliers() {
        assert_eq!(annual_multiplier(Frequency::Daily), 365.0);
        assert_eq!(annual_multiplier(Frequency::Weekly), 52.0);
        assert_eq!(annual_multiplier(Frequency::Monthly), 12.0);
        assert_eq!(annual_multiplier(Frequency::Quarterly), 4.0);
        assert_eq!(annual_multiplier(Frequency::Yearly), 1.0);
    }

    #[test]
    fn test_monthly_is_annual_over_twelve_for_monthly_frequency() {
        let c = cost(250.0, Frequency::Monthly, true);
        assert_relative_eq!(annualized(&c), monthly_normalized(&c) * 12.0);
        assert_eq!(annualized(&c), 3000.0);
    }

    #[test]
    fn test_yearly_annualized_is_amount() {
        let c = cost(940.0, Frequency::Yearly, true);
        assert_eq!(annualized(&c), 940.0);
        assert_relative_eq!(monthly_normalized(&c), 940.0 / 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_weekly_monthly_normalization() {
        let c = cost(100.0, Frequency::Weekly, true);
        assert_relative_eq!(monthly_normalized(&c), 433.0, epsilon = 1e-9);
        assert_eq!(annualized(&c), 5200.0);
    }

    #[test]
    fn test_quarterly_spreads_across_months() {
        let c = cost(300.0, Frequency::Quarterly, true);
        assert_relative_eq!(monthly_normalized(&c), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inactive_costs_contribute_nothing() {
        let costs = vec![
            cost(1000.0, Frequency::Monthly, true),
            cost(500.0, Frequency::Monthly, false),
            cost(120.0, Frequency::Yearly, false),
        ];

        assert_eq!(annual_fixed_costs(&costs), 12_000.0);
        assert_eq!(monthly_fixed_costs(&costs), 1000.0);
    }

    #[test]
    fn test_empty_collection_totals_are_zero() {
        assert_eq!(annual_fixed_costs(&[]), 0.0);
        assert_eq!(monthly_fixed_costs(&[]), 0.0);
    }
}
