//! Typed errors for record validation
//!
//! Aggregation itself is total: once records carry a typed frequency and a
//! non-negative amount, every computation produces a result. These errors
//! belong to the parse boundary where raw strings and numbers come in.

use thiserror::Error;

/// Validation errors for raw cost and revenue records
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Frequency token is not one of daily/weekly/monthly/quarterly/yearly.
    /// Unknown tokens indicate corrupt data and must never default.
    #[error("invalid cost frequency '{0}'")]
    InvalidFrequency(String),

    /// Record amounts must be non-negative
    #[error("record '{name}' has negative amount {amount}")]
    NegativeAmount { name: String, amount: f64 },
}
