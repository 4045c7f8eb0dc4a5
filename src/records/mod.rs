//! Financial input records and CSV ingestion

mod data;
pub mod loader;

pub use data::{DatedAmount, FixedCost, Frequency, Revenue, VariableCost};

use std::error::Error;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Container for the three record collections the engine consumes
///
/// The collections are independent; the engine correlates them only by
/// calendar month and year, never by foreign key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialRecords {
    pub fixed_costs: Vec<FixedCost>,
    pub variable_costs: Vec<VariableCost>,
    pub revenues: Vec<Revenue>,
}

impl FinancialRecords {
    /// Create a container from already-materialized collections
    pub fn new(
        fixed_costs: Vec<FixedCost>,
        variable_costs: Vec<VariableCost>,
        revenues: Vec<Revenue>,
    ) -> Self {
        Self {
            fixed_costs,
            variable_costs,
            revenues,
        }
    }

    /// Load records from CSV files in the default location (data/records/)
    pub fn from_csv() -> Result<Self, Box<dyn Error>> {
        loader::load_default_records()
    }

    /// Load records from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        loader::load_records(path)
    }

    /// True when all three collections are empty
    pub fn is_empty(&self) -> bool {
        self.fixed_costs.is_empty() && self.variable_costs.is_empty() && self.revenues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(FinancialRecords::default().is_empty());

        let records = FinancialRecords::new(
            vec![FixedCost::new(
                1,
                "Rent",
                800.0,
                Frequency::Monthly,
                true,
                "facilities",
            )],
            Vec::new(),
            Vec::new(),
        );
        assert!(!records.is_empty());
    }
}
