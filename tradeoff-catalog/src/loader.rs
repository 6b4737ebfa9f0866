//! Load replacement catalog entries from headered CSV files.
//!
//! budget items: `id,name,amount,tier,parent_id,fiscal_year,source,description`
//! units:        `id,name,name_singular,cost_per_unit,category,description,icon`
//!
//! Blank optional columns become `None`; a blank fiscal year means the
//! current federal fiscal year.

use anyhow::{bail, Context, Result};
use chrono::Local;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tradeoff_core::{fiscal_year_for, BudgetItem, BudgetTier, ComparisonUnit};

#[derive(Debug, Deserialize)]
struct BudgetItemRow {
    id: String,
    name: String,
    amount: f64,
    tier: BudgetTier,
    parent_id: Option<String>,
    fiscal_year: Option<i32>,
    source: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UnitRow {
    id: String,
    name: String,
    name_singular: Option<String>,
    cost_per_unit: f64,
    category: String,
    description: Option<String>,
    icon: Option<String>,
}

pub fn load_budget_items_csv(path: impl AsRef<Path>) -> Result<Vec<BudgetItem>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let default_fy = fiscal_year_for(Local::now().date_naive());
    read_budget_items(file, default_fy).with_context(|| format!("parsing {}", path.display()))
}

pub fn load_units_csv(path: impl AsRef<Path>) -> Result<Vec<ComparisonUnit>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_units(file).with_context(|| format!("parsing {}", path.display()))
}

pub fn read_budget_items<R: Read>(reader: R, default_fiscal_year: i32) -> Result<Vec<BudgetItem>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut items = Vec::new();

    for (i, result) in rdr.deserialize::<BudgetItemRow>().enumerate() {
        // header is line 1
        let line = i + 2;
        let row = result.with_context(|| format!("line {line}"))?;
        if !(row.amount.is_finite() && row.amount > 0.0) {
            bail!("line {line}: budget item '{}' has non-positive amount {}", row.id, row.amount);
        }

        items.push(BudgetItem {
            id: row.id,
            name: row.name,
            amount: row.amount,
            tier: row.tier,
            parent_id: row.parent_id.filter(|p| !p.is_empty()),
            fiscal_year: row.fiscal_year.unwrap_or(default_fiscal_year),
            source: row.source.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
        });
    }

    tracing::debug!(count = items.len(), "loaded budget items");
    Ok(items)
}

pub fn read_units<R: Read>(reader: R) -> Result<Vec<ComparisonUnit>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut units = Vec::new();

    for (i, result) in rdr.deserialize::<UnitRow>().enumerate() {
        let line = i + 2;
        let row = result.with_context(|| format!("line {line}"))?;
        let unit = ComparisonUnit {
            id: row.id,
            name: row.name,
            name_singular: row.name_singular.filter(|s| !s.is_empty()),
            cost_per_unit: row.cost_per_unit,
            category: row.category,
            description: row.description.filter(|s| !s.is_empty()),
            icon: row.icon.filter(|s| !s.is_empty()),
        };
        if !unit.has_valid_cost() {
            bail!("line {line}: unit '{}' has non-positive cost {}", unit.id, unit.cost_per_unit);
        }
        units.push(unit);
    }

    tracing::debug!(count = units.len(), "loaded comparison units");
    Ok(units)
}
