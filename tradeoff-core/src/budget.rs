//! Budget line items and the read-only catalog they live in.

use crate::error::{ComparisonError, Result};
use crate::units::ComparisonUnit;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// Where a line item sits in the spending hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetTier {
    #[serde(rename = "department")]
    Department,
    #[serde(rename = "program")]
    Program,
    #[serde(rename = "current-event")]
    CurrentEvent,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Department => "department",
            BudgetTier::Program => "program",
            BudgetTier::CurrentEvent => "current-event",
        }
    }
}

impl FromStr for BudgetTier {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "department" => Ok(BudgetTier::Department),
            "program" => Ok(BudgetTier::Program),
            "current-event" => Ok(BudgetTier::CurrentEvent),
            _ => Err(ComparisonError::UnknownTier(s.to_string())),
        }
    }
}

/// A named federal spending line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub id: String,
    pub name: String,
    /// USD, always > 0
    pub amount: f64,
    pub tier: BudgetTier,
    /// Weak reference used for drill-down display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub fiscal_year: i32,
    pub source: String,
    pub description: String,
}

impl BudgetItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: f64,
        tier: BudgetTier,
        fiscal_year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            tier,
            parent_id: None,
            fiscal_year,
            source: String::new(),
            description: String::new(),
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// US federal fiscal year for a calendar date (FY starts 1 October).
pub fn fiscal_year_for(date: NaiveDate) -> i32 {
    if date.month() >= 10 {
        date.year() + 1
    } else {
        date.year()
    }
}

/// Budget items and comparison units, loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub budget_items: Vec<BudgetItem>,
    pub units: Vec<ComparisonUnit>,
}

impl Catalog {
    pub fn new(budget_items: Vec<BudgetItem>, units: Vec<ComparisonUnit>) -> Self {
        Self { budget_items, units }
    }

    pub fn budget_item(&self, id: &str) -> Option<&BudgetItem> {
        self.budget_items.iter().find(|b| b.id == id)
    }

    pub fn unit(&self, id: &str) -> Option<&ComparisonUnit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn require_budget_item(&self, id: &str) -> Result<&BudgetItem> {
        self.budget_item(id)
            .ok_or_else(|| ComparisonError::UnknownBudgetItem(id.to_string()))
    }

    pub fn require_unit(&self, id: &str) -> Result<&ComparisonUnit> {
        self.unit(id)
            .ok_or_else(|| ComparisonError::UnknownUnit(id.to_string()))
    }

    /// Top-level items (no parent).
    pub fn roots(&self) -> Vec<&BudgetItem> {
        let mut out: Vec<&BudgetItem> = self
            .budget_items
            .iter()
            .filter(|b| b.parent_id.is_none())
            .collect();
        sort_by_amount_desc(&mut out);
        out
    }

    /// Direct children of `parent_id`, largest first.
    pub fn children_of(&self, parent_id: &str) -> Vec<&BudgetItem> {
        let mut out: Vec<&BudgetItem> = self
            .budget_items
            .iter()
            .filter(|b| b.parent_id.as_deref() == Some(parent_id))
            .collect();
        sort_by_amount_desc(&mut out);
        out
    }

    pub fn by_tier(&self, tier: BudgetTier) -> Vec<&BudgetItem> {
        self.budget_items.iter().filter(|b| b.tier == tier).collect()
    }

    /// Path from the top-level ancestor down to `id`.
    ///
    /// A parent id that does not resolve ends the walk; so does a cycle.
    pub fn breadcrumb(&self, id: &str) -> Result<Vec<&BudgetItem>> {
        let mut current = self.require_budget_item(id)?;
        let mut path = vec![current];
        let mut seen: HashSet<&str> = HashSet::from([current.id.as_str()]);

        while let Some(parent_id) = current.parent_id.as_deref() {
            if !seen.insert(parent_id) {
                tracing::debug!(id, parent_id, "cycle in budget hierarchy");
                break;
            }
            match self.budget_item(parent_id) {
                Some(parent) => {
                    path.push(parent);
                    current = parent;
                }
                None => break,
            }
        }

        path.reverse();
        Ok(path)
    }

    /// Replace entries with the same id and append new ones.
    pub fn merge(&mut self, other: Catalog) {
        for item in other.budget_items {
            match self.budget_items.iter_mut().find(|b| b.id == item.id) {
                Some(existing) => *existing = item,
                None => self.budget_items.push(item),
            }
        }
        for unit in other.units {
            match self.units.iter_mut().find(|u| u.id == unit.id) {
                Some(existing) => *existing = unit,
                None => self.units.push(unit),
            }
        }
    }
}

fn sort_by_amount_desc(items: &mut [&BudgetItem]) {
    items.sort_by(|a, b| b.amount.total_cmp(&a.amount));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(
            vec![
                BudgetItem::new("dept-a", "Department A", 900.0, BudgetTier::Department, 2024),
                BudgetItem::new("prog-small", "Small Program", 100.0, BudgetTier::Program, 2024)
                    .with_parent("dept-a"),
                BudgetItem::new("prog-big", "Big Program", 500.0, BudgetTier::Program, 2024)
                    .with_parent("dept-a"),
                BudgetItem::new("event", "Event", 50.0, BudgetTier::CurrentEvent, 2024)
                    .with_parent("prog-big"),
            ],
            vec![],
        )
    }

    #[test]
    fn test_fiscal_year_rolls_over_in_october() {
        let sept = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();
        let oct = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        assert_eq!(fiscal_year_for(sept), 2024);
        assert_eq!(fiscal_year_for(oct), 2025);
    }

    #[test]
    fn test_children_sorted_by_amount() {
        let c = sample();
        let kids: Vec<&str> = c.children_of("dept-a").iter().map(|b| b.id.as_str()).collect();
        assert_eq!(kids, vec!["prog-big", "prog-small"]);
        assert!(c.children_of("event").is_empty());
    }

    #[test]
    fn test_by_tier_keeps_catalog_order() {
        let c = sample();
        let programs: Vec<&str> = c.by_tier(BudgetTier::Program).iter().map(|b| b.id.as_str()).collect();
        assert_eq!(programs, vec!["prog-small", "prog-big"]);
        let events: Vec<&str> = c.by_tier(BudgetTier::CurrentEvent).iter().map(|b| b.id.as_str()).collect();
        assert_eq!(events, vec!["event"]);
        assert!(Catalog::default().by_tier(BudgetTier::Department).is_empty());
    }

    #[test]
    fn test_tier_parses_from_id() {
        assert_eq!("current-event".parse::<BudgetTier>().unwrap(), BudgetTier::CurrentEvent);
        assert_eq!(" Program ".parse::<BudgetTier>().unwrap(), BudgetTier::Program);
        assert_eq!(
            "agency".parse::<BudgetTier>(),
            Err(ComparisonError::UnknownTier("agency".to_string()))
        );
    }

    #[test]
    fn test_breadcrumb_walks_to_root() {
        let c = sample();
        let path: Vec<&str> = c.breadcrumb("event").unwrap().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(path, vec!["dept-a", "prog-big", "event"]);
    }

    #[test]
    fn test_breadcrumb_unknown_id() {
        let c = sample();
        assert_eq!(
            c.breadcrumb("nope"),
            Err(ComparisonError::UnknownBudgetItem("nope".to_string()))
        );
    }

    #[test]
    fn test_breadcrumb_stops_on_cycle() {
        let c = Catalog::new(
            vec![
                BudgetItem::new("a", "A", 1.0, BudgetTier::Program, 2024).with_parent("b"),
                BudgetItem::new("b", "B", 1.0, BudgetTier::Program, 2024).with_parent("a"),
            ],
            vec![],
        );
        let path = c.breadcrumb("a").unwrap();
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_merge_overrides_by_id() {
        let mut c = sample();
        c.merge(Catalog::new(
            vec![
                BudgetItem::new("dept-a", "Renamed", 1000.0, BudgetTier::Department, 2025),
                BudgetItem::new("dept-b", "Department B", 10.0, BudgetTier::Department, 2025),
            ],
            vec![],
        ));
        assert_eq!(c.budget_items.len(), 5);
        assert_eq!(c.budget_item("dept-a").unwrap().name, "Renamed");
        assert_eq!(c.roots().len(), 2);
    }

    #[test]
    fn test_budget_item_serializes_camel_case() {
        let item = BudgetItem::new("p", "P", 1.0, BudgetTier::CurrentEvent, 2024).with_parent("d");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["tier"], "current-event");
        assert_eq!(json["parentId"], "d");
        assert_eq!(json["fiscalYear"], 2024);
    }
}
