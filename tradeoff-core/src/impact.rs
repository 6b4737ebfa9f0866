//! Contextual impact scoring: pick the single most relatable comparison
//! for one budget item.
//!
//! Bonuses are additive:
//! - +20 when the count is within 0.1 of a whole number
//! - +30 / +20 / +10 for counts in 1..=10 / ..=100 / ..=1000
//! - +30 / +20 / +10 when budget and unit are within 0.5x..2x / ..10x / ..100x
//! - +15 / +10 / +8 for `everyday` / `misc` / `vehicles` units

use crate::budget::BudgetItem;
use crate::comparison::{format_comparison, unit_count};
use crate::error::Result;
use crate::units::ComparisonUnit;
use serde::{Deserialize, Serialize};

/// Counts outside this range are not relatable.
pub const MIN_RELATABLE_COUNT: f64 = 0.01;
pub const MAX_RELATABLE_COUNT: f64 = 10_000_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestComparison {
    pub unit: ComparisonUnit,
    pub count: f64,
    pub score: u32,
    pub formatted: String,
}

/// Score one unit against a budget amount.
pub fn calculate_impact_score(budget_amount: f64, unit: &ComparisonUnit) -> Result<u32> {
    let count = unit_count(budget_amount, unit)?;
    Ok(score_count(count, &unit.category))
}

// The count doubles as the budget-to-unit ratio, so both magnitude bonuses
// read the same value.
fn score_count(count: f64, category: &str) -> u32 {
    let mut score = 0;

    if (count - count.round()).abs() < 0.1 {
        score += 20;
    }

    if (1.0..=10.0).contains(&count) {
        score += 30;
    } else if count > 10.0 && count <= 100.0 {
        score += 20;
    } else if count > 100.0 && count <= 1_000.0 {
        score += 10;
    }

    if (0.5..=2.0).contains(&count) {
        score += 30;
    } else if count > 2.0 && count <= 10.0 {
        score += 20;
    } else if count > 10.0 && count <= 100.0 {
        score += 10;
    }

    score += match category {
        "everyday" => 15,
        "misc" => 10,
        "vehicles" => 8,
        _ => 0,
    };

    score
}

fn is_relatable(count: f64) -> bool {
    (MIN_RELATABLE_COUNT..=MAX_RELATABLE_COUNT).contains(&count)
}

/// Highest-scoring unit for `item`; the earliest unit wins ties.
pub fn find_best_comparison(item: &BudgetItem, units: &[ComparisonUnit]) -> Option<BestComparison> {
    let mut best: Option<(&ComparisonUnit, f64, u32)> = None;

    for unit in units {
        let count = match unit_count(item.amount, unit) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(budget_item = %item.id, error = %e, "skipping unit");
                continue;
            }
        };
        if !is_relatable(count) {
            continue;
        }

        let score = score_count(count, &unit.category);
        match best {
            Some((_, _, best_score)) if score <= best_score => {}
            _ => best = Some((unit, count, score)),
        }
    }

    best.map(|(unit, count, score)| BestComparison {
        unit: unit.clone(),
        count,
        score,
        formatted: format_comparison(count, unit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::BudgetTier;
    use crate::error::ComparisonError;

    fn item(amount: f64) -> BudgetItem {
        BudgetItem::new("item", "Item", amount, BudgetTier::Program, 2024)
    }

    #[test]
    fn test_teacher_salary_scores_deterministically() {
        let teacher = ComparisonUnit::new("teacher", "Teacher Salaries", 65_000.0, "everyday")
            .with_singular("Teacher Salary");
        let a = calculate_impact_score(2_680_000_000.0, &teacher).unwrap();
        let b = calculate_impact_score(2_680_000_000.0, &teacher).unwrap();
        assert_eq!(a, b);
        assert!(a > 0);
        // 41,230.77: no whole-number, magnitude, or ratio bonus; everyday only
        assert_eq!(a, 15);
    }

    #[test]
    fn test_teacher_beats_five_dollar_food_unit() {
        let teacher = ComparisonUnit::new("teacher", "Teacher Salaries", 65_000.0, "everyday");
        let meal = ComparisonUnit::new("meal", "Meals", 5.0, "food");
        // 536M meals is past the relatable range, so only the teacher is scored
        let best = find_best_comparison(&item(2_680_000_000.0), &[meal, teacher]).unwrap();
        assert_eq!(best.unit.id, "teacher");
    }

    #[test]
    fn test_bonus_brackets() {
        // exact 1: whole +20, 1..=10 +30, 0.5..=2 +30
        assert_eq!(score_count(1.0, "health"), 80);
        // exact 5: whole +20, 1..=10 +30, 2..=10 +20
        assert_eq!(score_count(5.0, "health"), 70);
        // 50.5: 10..=100 +20, 10..=100 +10
        assert_eq!(score_count(50.5, "health"), 30);
        // 500.5: 100..=1000 +10
        assert_eq!(score_count(500.5, "health"), 10);
        // 0.75: ratio 0.5..=2 +30 only
        assert_eq!(score_count(0.75, "health"), 30);
        assert_eq!(score_count(5_000.5, "everyday"), 15);
        assert_eq!(score_count(5_000.5, "misc"), 10);
        assert_eq!(score_count(5_000.5, "vehicles"), 8);
    }

    #[test]
    fn test_whole_number_tolerance() {
        assert_eq!(score_count(2_000.05, "x"), 20);
        assert_eq!(score_count(2_000.2, "x"), 0);
    }

    #[test]
    fn test_invalid_cost_errors() {
        let broken = ComparisonUnit::new("broken", "Broken", 0.0, "misc");
        assert!(matches!(
            calculate_impact_score(100.0, &broken),
            Err(ComparisonError::InvalidUnitCost { .. })
        ));
    }

    #[test]
    fn test_out_of_range_units_rejected() {
        let units = vec![
            ComparisonUnit::new("penny", "Pennies", 0.0001, "everyday"),
            ComparisonUnit::new("moon", "Moon Missions", 1e15, "misc"),
        ];
        assert_eq!(find_best_comparison(&item(1_000_000.0), &units), None);
        assert_eq!(find_best_comparison(&item(1.0), &[]), None);
    }

    #[test]
    fn test_ties_keep_first_unit() {
        let units = vec![
            ComparisonUnit::new("first", "Firsts", 100.0, "misc"),
            ComparisonUnit::new("second", "Seconds", 100.0, "misc"),
        ];
        let best = find_best_comparison(&item(500.0), &units).unwrap();
        assert_eq!(best.unit.id, "first");
        assert_eq!(best.count, 5.0);
        assert_eq!(best.score, 80);
        assert_eq!(best.formatted, "5 Firsts");
    }

    #[test]
    fn test_invalid_units_skipped_not_fatal() {
        let units = vec![
            ComparisonUnit::new("broken", "Broken", -1.0, "misc"),
            ComparisonUnit::new("car", "Cars", 25_000.0, "vehicles").with_singular("Car"),
        ];
        let best = find_best_comparison(&item(50_000.0), &units).unwrap();
        assert_eq!(best.unit.id, "car");
        assert_eq!(best.formatted, "2 Cars");
    }
}
