//! Error taxonomy for comparison, lookup, and parsing failures.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComparisonError {
    /// Unit cost must be a finite, strictly positive dollar amount.
    #[error("invalid cost {cost} for comparison unit '{unit_id}'")]
    InvalidUnitCost { unit_id: String, cost: f64 },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A known category with no mapping entry (a data bug, not an empty result).
    #[error("category '{0}' has no mapping entry")]
    UnmappedCategory(String),

    #[error("category '{category}' references missing budget item '{id}'")]
    DanglingBudgetItem { category: String, id: String },

    #[error("unknown budget item: {0}")]
    UnknownBudgetItem(String),

    #[error("unknown comparison unit: {0}")]
    UnknownUnit(String),

    #[error("unknown budget tier: {0}")]
    UnknownTier(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

pub type Result<T> = std::result::Result<T, ComparisonError>;
