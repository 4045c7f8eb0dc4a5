//! Cost and revenue record types
//!
//! Records are plain data owned by the dashboard's storage service; the
//! engine reads them and never creates, updates, or deletes them.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// How often a fixed cost recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    /// Token used in CSV exports and JSON payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl FromStr for Frequency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(EngineError::InvalidFrequency(other.to_string())),
        }
    }
}

impl TryFrom<String> for Frequency {
    type Error = EngineError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Frequency> for String {
    fn from(frequency: Frequency) -> Self {
        frequency.as_str().to_string()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recurring operating cost (rent, salaries, subscriptions)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedCost {
    /// Unique record identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Amount per occurrence, non-negative
    pub amount: f64,

    /// How often the amount recurs
    pub frequency: Frequency,

    /// Only active costs contribute to aggregates
    pub is_active: bool,

    /// Free-form category label
    pub category: String,
}

impl FixedCost {
    /// Create a new fixed cost record
    pub fn new(
        id: u32,
        name: &str,
        amount: f64,
        frequency: Frequency,
        is_active: bool,
        category: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            amount,
            frequency,
            is_active,
            category: category.to_string(),
        }
    }
}

/// A one-off cost incurred on a specific date (materials, shipping, ads)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableCost {
    /// Unique record identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Amount, non-negative
    pub amount: f64,

    /// Date the cost was incurred; determines its month/year bucket
    pub date: NaiveDate,

    /// Free-form category label
    pub category: String,
}

impl VariableCost {
    /// Create a new variable cost record
    pub fn new(id: u32, name: &str, amount: f64, date: NaiveDate, category: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            amount,
            date,
            category: category.to_string(),
        }
    }
}

/// Income received on a specific date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revenue {
    /// Unique record identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Amount, non-negative
    pub amount: f64,

    /// Date the revenue was received; determines its month/year bucket
    pub date: NaiveDate,

    /// Where the revenue came from (client, channel, product line)
    pub source: String,
}

impl Revenue {
    /// Create a new revenue record
    pub fn new(id: u32, name: &str, amount: f64, date: NaiveDate, source: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            amount,
            date,
            source: source.to_string(),
        }
    }
}

/// Date-stamped amount, the common shape of variable costs and revenues
///
/// Lets year-to-date sums and month filters be written once for both
/// record kinds.
pub trait DatedAmount {
    fn date(&self) -> NaiveDate;
    fn amount(&self) -> f64;
}

impl DatedAmount for VariableCost {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> f64 {
        self.amount
    }
}

impl DatedAmount for Revenue {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> f64 {
        self.amount
    }
}
