//! Comparison engine: dollars to "N units" plus display text.

use crate::error::{ComparisonError, Result};
use crate::money::{format_with_commas, trim_decimal};
use crate::units::ComparisonUnit;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub unit_count: f64,
    pub formatted: String,
}

/// Divide `amount` by the unit cost, rejecting non-positive costs.
pub fn unit_count(amount: f64, unit: &ComparisonUnit) -> Result<f64> {
    if !unit.has_valid_cost() {
        return Err(ComparisonError::InvalidUnitCost {
            unit_id: unit.id.clone(),
            cost: unit.cost_per_unit,
        });
    }
    Ok(amount / unit.cost_per_unit)
}

/// How many `unit`s `amount` buys, with a readable rendering.
pub fn calculate_comparison(amount: f64, unit: &ComparisonUnit) -> Result<ComparisonResult> {
    let count = unit_count(amount, unit)?;
    Ok(ComparisonResult {
        unit_count: count,
        formatted: format_comparison(count, unit),
    })
}

/// Count rendering:
/// - below 1: `"45% of one"`
/// - millions: `"2.5M"`
/// - thousands: `"41.2K"`
/// - otherwise the floored integer with separators
///
/// The suffix is picked after rounding to one decimal, so 999,960 is `"1M"`.
pub fn format_count(count: f64) -> String {
    let thousands = (count / 100.0).round() / 10.0;

    if count < 1.0 {
        format!("{}% of one", (count * 100.0).round() as i64)
    } else if thousands >= 1_000.0 {
        format!("{}M", trim_decimal(count / 1_000_000.0, 1))
    } else if count >= 1_000.0 {
        format!("{}K", trim_decimal(thousands, 1))
    } else {
        format_with_commas(count.floor() as u64)
    }
}

/// `format_count` plus the unit noun.
pub fn format_comparison(count: f64, unit: &ComparisonUnit) -> String {
    let label = if count < 1.0 {
        Some(unit.singular_or_name())
    } else {
        unit.label_for(count)
    };

    let number = format_count(count);
    match label {
        Some(label) => format!("{number} {label}"),
        None => number,
    }
}
