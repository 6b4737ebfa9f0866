//! tradeoff-core: budget comparison model, wizard ranking, and impact scoring

pub mod budget;
pub mod categories;
pub mod comparison;
pub mod error;
pub mod impact;
pub mod money;
pub mod units;
pub mod wizard;

pub use budget::{fiscal_year_for, BudgetItem, BudgetTier, Catalog};
pub use categories::{
    budget_items_for_category, category_budget_total, comparison_units_for_category,
    resolve_budget_items, CategoryDefinition, CategoryMapping, MappingIssue, PriorityCategory,
    WastefulCategory,
};
pub use comparison::{calculate_comparison, format_comparison, format_count, ComparisonResult};
pub use error::{ComparisonError, Result};
pub use impact::{calculate_impact_score, find_best_comparison, BestComparison};
pub use money::{format_currency, format_with_commas, parse_amount};
pub use units::ComparisonUnit;
pub use wizard::{
    format_comparison_headline, generate_wizard_comparisons, WizardComparison,
    MAX_WIZARD_COMPARISONS,
};
