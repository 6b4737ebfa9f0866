//! Wizard comparisons: cross-join the user's "wasteful" budget lines with
//! units from their priority categories and keep the five most striking.
//!
//! Ordering:
//! 1. comparisons for the top priority first
//! 2. counts more than `IMPACT_DOMINANCE_THRESHOLD` apart: larger count first
//! 3. otherwise: larger budget item first

use crate::budget::{BudgetItem, Catalog};
use crate::categories::{
    budget_items_for_category, comparison_units_for_category, CategoryMapping, PriorityCategory,
    WastefulCategory,
};
use crate::money::format_with_commas;
use crate::units::ComparisonUnit;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const MAX_WIZARD_COMPARISONS: usize = 5;

/// Counts closer than this are treated as equally impactful.
pub const IMPACT_DOMINANCE_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardComparison {
    pub budget_item: BudgetItem,
    pub unit: ComparisonUnit,
    pub unit_count: f64,
    pub is_top_priority: bool,
    pub priority_category: PriorityCategory,
    pub wasteful_category: WastefulCategory,
}

/// Build the ranked comparison list for one wizard session.
///
/// `top_priority` is not required to appear in `priorities`.
pub fn generate_wizard_comparisons(
    catalog: &Catalog,
    mapping: &CategoryMapping,
    priorities: &[PriorityCategory],
    wasteful: &[WastefulCategory],
    top_priority: PriorityCategory,
) -> Vec<WizardComparison> {
    let mut candidates = Vec::new();

    for &wasteful_category in wasteful {
        let items = budget_items_for_category(catalog, mapping, wasteful_category);
        for &priority_category in priorities {
            let units = comparison_units_for_category(catalog, mapping, priority_category);
            for item in &items {
                for unit in &units {
                    if !unit.has_valid_cost() {
                        tracing::debug!(unit = %unit.id, cost = unit.cost_per_unit, "skipping unit with invalid cost");
                        continue;
                    }
                    let unit_count = item.amount / unit.cost_per_unit;
                    if unit_count < 1.0 {
                        continue;
                    }
                    candidates.push(WizardComparison {
                        budget_item: (*item).clone(),
                        unit: (*unit).clone(),
                        unit_count,
                        is_top_priority: priority_category == top_priority,
                        priority_category,
                        wasteful_category,
                    });
                }
            }
        }
    }

    tracing::debug!(candidates = candidates.len(), "wizard comparisons generated");

    insertion_sort_by(&mut candidates, compare_wizard);
    candidates.truncate(MAX_WIZARD_COMPARISONS);
    candidates
}

/// Ranking comparator. Not transitive across the threshold, so only use it
/// with [`insertion_sort_by`].
pub fn compare_wizard(a: &WizardComparison, b: &WizardComparison) -> Ordering {
    match (a.is_top_priority, b.is_top_priority) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    if (b.unit_count - a.unit_count).abs() > IMPACT_DOMINANCE_THRESHOLD {
        return b.unit_count.total_cmp(&a.unit_count);
    }

    b.budget_item.amount.total_cmp(&a.budget_item.amount)
}

/// Stable insertion sort. `slice::sort_by` may panic on comparators that
/// are not a total order; this one cannot, and its output only depends on
/// the input order.
fn insertion_sort_by<T, F>(v: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && cmp(&v[j - 1], &v[j]) == Ordering::Greater {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// `"Department of Defense could fund 41,230 Teacher Salaries"`
pub fn format_comparison_headline(comparison: &WizardComparison) -> String {
    let whole = comparison.unit_count.floor().max(0.0);
    let label = comparison.unit.label_for(whole).unwrap_or_default();
    format!(
        "{} could fund {} {}",
        comparison.budget_item.name,
        format_with_commas(whole as u64),
        label
    )
    .trim_end()
    .to_string()
}
