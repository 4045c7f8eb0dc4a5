//! CSV-based record loader
//!
//! Loads cost and revenue records exported by the dashboard's storage
//! service from CSV files in data/records/

use std::error::Error;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::EngineError;
use crate::records::{FinancialRecords, FixedCost, Frequency, Revenue, VariableCost};

/// Default path to exported record files
pub const DEFAULT_RECORDS_PATH: &str = "data/records";

/// Date format used by the exports
const DATE_FORMAT: &str = "%Y-%m-%d";

fn check_amount(name: &str, amount: f64) -> Result<f64, EngineError> {
    if amount < 0.0 {
        Err(EngineError::NegativeAmount {
            name: name.to_string(),
            amount,
        })
    } else {
        Ok(amount)
    }
}

/// Load fixed cost records from CSV
/// Columns: id,name,amount,frequency,is_active,category
pub fn load_fixed_costs(path: &Path) -> Result<Vec<FixedCost>, Box<dyn Error>> {
    let file = File::open(path.join("fixed_costs.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut costs = Vec::new();
    for result in reader.records() {
        let record = result?;
        let id: u32 = record[0].parse()?;
        let name = record[1].to_string();
        let amount = check_amount(&name, record[2].parse()?)?;
        let frequency: Frequency = record[3].parse()?;
        let is_active: bool = record[4].parse()?;
        let category = record[5].to_string();

        costs.push(FixedCost {
            id,
            name,
            amount,
            frequency,
            is_active,
            category,
        });
    }

    Ok(costs)
}

/// Load variable cost records from CSV
/// Columns: id,name,amount,date,category
pub fn load_variable_costs(path: &Path) -> Result<Vec<VariableCost>, Box<dyn Error>> {
    let file = File::open(path.join("variable_costs.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut costs = Vec::new();
    for result in reader.records() {
        let record = result?;
        let id: u32 = record[0].parse()?;
        let name = record[1].to_string();
        let amount = check_amount(&name, record[2].parse()?)?;
        let date = NaiveDate::parse_from_str(&record[3], DATE_FORMAT)?;
        let category = record[4].to_string();

        costs.push(VariableCost {
            id,
            name,
            amount,
            date,
            category,
        });
    }

    Ok(costs)
}

/// Load revenue records from CSV
/// Columns: id,name,amount,date,source
pub fn load_revenues(path: &Path) -> Result<Vec<Revenue>, Box<dyn Error>> {
    let file = File::open(path.join("revenues.csv"))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut revenues = Vec::new();
    for result in reader.records() {
        let record = result?;
        let id: u32 = record[0].parse()?;
        let name = record[1].to_string();
        let amount = check_amount(&name, record[2].parse()?)?;
        let date = NaiveDate::parse_from_str(&record[3], DATE_FORMAT)?;
        let source = record[4].to_string();

        revenues.push(Revenue {
            id,
            name,
            amount,
            date,
            source,
        });
    }

    Ok(revenues)
}

/// Load all record collections from the default path
pub fn load_default_records() -> Result<FinancialRecords, Box<dyn Error>> {
    load_records(Path::new(DEFAULT_RECORDS_PATH))
}

/// Load all record collections from a specific directory
pub fn load_records(path: &Path) -> Result<FinancialRecords, Box<dyn Error>> {
    let records = FinancialRecords {
        fixed_costs: load_fixed_costs(path)?,
        variable_costs: load_variable_costs(path)?,
        revenues: load_revenues(path)?,
    };

    log::info!(
        "loaded {} fixed costs, {} variable costs, {} revenues from {}",
        records.fixed_costs.len(),
        records.variable_costs.len(),
        records.revenues.len(),
        path.display()
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_load_default_records() {
        let result = load_default_records();
        assert!(result.is_ok(), "Failed to load records: {:?}", result.err());

        let records = result.unwrap();

        assert!(records.fixed_costs.len() >= 5);
        assert!(!records.variable_costs.is_empty());
        assert!(!records.revenues.is_empty());

        // The sample export carries one deactivated cost
        assert!(records.fixed_costs.iter().any(|c| !c.is_active));

        // Dates parsed into real calendar dates
        assert_eq!(records.revenues[0].date.year(), 2025);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = check_amount("Bad record", -12.0).unwrap_err();
        assert_eq!(
            err,
            EngineError::NegativeAmount {
                name: "Bad record".to_string(),
                amount: -12.0
            }
        );

        assert_eq!(check_amount("Ok record", 0.0).unwrap(), 0.0);
    }
}
