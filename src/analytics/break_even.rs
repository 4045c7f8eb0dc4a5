//! Monthly break-even threshold and pacing
//!
//! Estimates how many days of revenue, at the pace observed so far this
//! month, are needed to cover the month's cost threshold.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar;

/// Break-even status for the month containing the evaluation date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEven {
    /// Revenue needed this month to cover the cost threshold
    pub monthly_break_even: f64,

    /// Estimated days from the start of the month until the threshold is
    /// reached. May exceed the days in the month, meaning the month will
    /// close before break-even; informational, never an error.
    pub days_to_break_even: u32,
}

/// Estimate break-even pacing for the month of `as_of`
///
/// `threshold` is the monthly cost level revenue has to cover;
/// `monthly_revenue` is what the month has produced through `as_of`.
pub fn days_to_break_even(threshold: f64, monthly_revenue: f64, as_of: NaiveDate) -> BreakEven {
    if threshold <= 0.0 {
        // Nothing to cover; also keeps the needed daily rate away from
        // zero in the behind-pace branch below
        return BreakEven {
            monthly_break_even: threshold.max(0.0),
            days_to_break_even: 0,
        };
    }

    let days_in_month = calendar::days_in_month(as_of.year(), as_of.month());
    let current_day = as_of.day().max(1);

    let daily_needed = threshold / days_in_month as f64;
    let daily_current = monthly_revenue / current_day as f64;

    let days = if daily_current > daily_needed {
        // Ahead of pace: the observed daily revenue carries to the
        // threshold on its own
        (threshold / daily_current).ceil() as u32
    } else {
        // Behind pace: the remaining gap at the needed daily rate, on top
        // of the days already burned
        let gap = (threshold - monthly_revenue).max(0.0);
        (days_in_month - current_day) + (gap / daily_needed).ceil() as u32
    };

    BreakEven {
        monthly_break_even: threshold,
        days_to_break_even: days,
    }
}
