//! tradeoff-catalog: built-in budget lines, comparison units, category tables, and CSV overrides

pub mod budget_items;
pub mod categories;
pub mod loader;
pub mod units;

pub use budget_items::builtin_budget_items;
pub use categories::{builtin_mapping, priority_definitions, wasteful_definitions};
pub use loader::{load_budget_items_csv, load_units_csv};
pub use units::builtin_units;

use anyhow::Result;
use std::path::Path;
use tradeoff_core::Catalog;

pub fn builtin_catalog() -> Catalog {
    Catalog::new(builtin_budget_items(), builtin_units())
}

/// Built-in catalog with entries from the optional CSV files merged over it by id.
pub fn load_catalog(budget_csv: Option<&Path>, units_csv: Option<&Path>) -> Result<Catalog> {
    let mut catalog = builtin_catalog();
    let mut overrides = Catalog::default();

    if let Some(path) = budget_csv {
        overrides.budget_items = load_budget_items_csv(path)?;
        tracing::info!(path = %path.display(), count = overrides.budget_items.len(), "budget item overrides");
    }
    if let Some(path) = units_csv {
        overrides.units = load_units_csv(path)?;
        tracing::info!(path = %path.display(), count = overrides.units.len(), "unit overrides");
    }

    catalog.merge(overrides);
    Ok(catalog)
}
