//! Priority/wasteful categories and the tables that resolve them into
//! comparison units and budget items.

use crate::budget::{BudgetItem, Catalog};
use crate::error::{ComparisonError, Result};
use crate::units::ComparisonUnit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// What the user wants more money spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriorityCategory {
    Education,
    Healthcare,
    Infrastructure,
    Environment,
    Housing,
    Veterans,
    Research,
    PublicSafety,
}

impl PriorityCategory {
    pub const ALL: [PriorityCategory; 8] = [
        PriorityCategory::Education,
        PriorityCategory::Healthcare,
        PriorityCategory::Infrastructure,
        PriorityCategory::Environment,
        PriorityCategory::Housing,
        PriorityCategory::Veterans,
        PriorityCategory::Research,
        PriorityCategory::PublicSafety,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityCategory::Education => "education",
            PriorityCategory::Healthcare => "healthcare",
            PriorityCategory::Infrastructure => "infrastructure",
            PriorityCategory::Environment => "environment",
            PriorityCategory::Housing => "housing",
            PriorityCategory::Veterans => "veterans",
            PriorityCategory::Research => "research",
            PriorityCategory::PublicSafety => "public-safety",
        }
    }
}

/// Spending the user considers wasteful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WastefulCategory {
    Defense,
    ForeignAid,
    CorporateSubsidies,
    AdministrativeOverhead,
    InterestOnDebt,
    /// Free-text "something else"; never mapped to budget items.
    Other,
}

impl WastefulCategory {
    pub const ALL: [WastefulCategory; 6] = [
        WastefulCategory::Defense,
        WastefulCategory::ForeignAid,
        WastefulCategory::CorporateSubsidies,
        WastefulCategory::AdministrativeOverhead,
        WastefulCategory::InterestOnDebt,
        WastefulCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WastefulCategory::Defense => "defense",
            WastefulCategory::ForeignAid => "foreign-aid",
            WastefulCategory::CorporateSubsidies => "corporate-subsidies",
            WastefulCategory::AdministrativeOverhead => "administrative-overhead",
            WastefulCategory::InterestOnDebt => "interest-on-debt",
            WastefulCategory::Other => "other",
        }
    }

    /// Categories with no budget items on purpose.
    pub fn is_intentionally_unmapped(&self) -> bool {
        matches!(self, WastefulCategory::Other)
    }
}

impl fmt::Display for PriorityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WastefulCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityCategory {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        PriorityCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| ComparisonError::UnknownCategory(s.to_string()))
    }
}

impl FromStr for WastefulCategory {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        WastefulCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| ComparisonError::UnknownCategory(s.to_string()))
    }
}

/// Display metadata for a category card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl CategoryDefinition {
    pub fn new(id: &str, name: &str, description: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Hand-authored lookup tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryMapping {
    /// priority -> `ComparisonUnit::category` tag
    pub priority_units: BTreeMap<PriorityCategory, String>,
    /// wasteful -> budget item ids, in display order
    pub wasteful_items: BTreeMap<WastefulCategory, Vec<String>>,
}

/// One integrity problem found by [`CategoryMapping::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MappingIssue {
    DanglingBudgetItem { category: WastefulCategory, id: String },
    EmptyUnitCategory { category: PriorityCategory, unit_category: String },
    MissingPriority { category: PriorityCategory },
    MissingWasteful { category: WastefulCategory },
}

impl fmt::Display for MappingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingIssue::DanglingBudgetItem { category, id } => {
                write!(f, "{category}: budget item '{id}' is not in the catalog")
            }
            MappingIssue::EmptyUnitCategory { category, unit_category } => {
                write!(f, "{category}: no comparison unit has category '{unit_category}'")
            }
            MappingIssue::MissingPriority { category } => {
                write!(f, "{category}: no unit category mapped")
            }
            MappingIssue::MissingWasteful { category } => {
                write!(f, "{category}: no budget items mapped")
            }
        }
    }
}

impl CategoryMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_priority(mut self, category: PriorityCategory, unit_category: &str) -> Self {
        self.priority_units.insert(category, unit_category.to_string());
        self
    }

    pub fn with_wasteful(mut self, category: WastefulCategory, ids: &[&str]) -> Self {
        self.wasteful_items
            .insert(category, ids.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn unit_category(&self, category: PriorityCategory) -> Option<&str> {
        self.priority_units.get(&category).map(String::as_str)
    }

    pub fn budget_item_ids(&self, category: WastefulCategory) -> &[String] {
        self.wasteful_items
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every reference must resolve and every category except the
    /// intentionally unmapped ones must have an entry.
    pub fn validate(&self, catalog: &Catalog) -> Vec<MappingIssue> {
        let mut issues = Vec::new();

        for category in PriorityCategory::ALL {
            match self.unit_category(category) {
                None => issues.push(MappingIssue::MissingPriority { category }),
                Some(tag) if !catalog.units.iter().any(|u| u.category == tag) => {
                    issues.push(MappingIssue::EmptyUnitCategory {
                        category,
                        unit_category: tag.to_string(),
                    });
                }
                Some(_) => {}
            }
        }

        for category in WastefulCategory::ALL {
            let Some(ids) = self.wasteful_items.get(&category) else {
                if !category.is_intentionally_unmapped() {
                    issues.push(MappingIssue::MissingWasteful { category });
                }
                continue;
            };
            for id in ids {
                if catalog.budget_item(id).is_none() {
                    issues.push(MappingIssue::DanglingBudgetItem {
                        category,
                        id: id.clone(),
                    });
                }
            }
        }

        issues
    }
}

/// Budget items behind a wasteful category. Unknown ids are skipped and an
/// unmapped category yields an empty list.
pub fn budget_items_for_category<'a>(
    catalog: &'a Catalog,
    mapping: &CategoryMapping,
    category: WastefulCategory,
) -> Vec<&'a BudgetItem> {
    mapping
        .budget_item_ids(category)
        .iter()
        .filter_map(|id| {
            let item = catalog.budget_item(id);
            if item.is_none() {
                tracing::debug!(category = %category, id = %id, "mapped budget item missing from catalog");
            }
            item
        })
        .collect()
}

/// Strict counterpart of [`budget_items_for_category`]: only
/// intentionally unmapped categories may come back empty without an error.
pub fn resolve_budget_items<'a>(
    catalog: &'a Catalog,
    mapping: &CategoryMapping,
    category: WastefulCategory,
) -> Result<Vec<&'a BudgetItem>> {
    let Some(ids) = mapping.wasteful_items.get(&category) else {
        if category.is_intentionally_unmapped() {
            return Ok(Vec::new());
        }
        return Err(ComparisonError::UnmappedCategory(category.to_string()));
    };

    ids.iter()
        .map(|id| {
            catalog
                .budget_item(id)
                .ok_or_else(|| ComparisonError::DanglingBudgetItem {
                    category: category.to_string(),
                    id: id.clone(),
                })
        })
        .collect()
}

/// Units whose tag matches the priority's mapped unit category, in catalog order.
pub fn comparison_units_for_category<'a>(
    catalog: &'a Catalog,
    mapping: &CategoryMapping,
    category: PriorityCategory,
) -> Vec<&'a ComparisonUnit> {
    let Some(tag) = mapping.unit_category(category) else {
        return Vec::new();
    };
    catalog.units.iter().filter(|u| u.category == tag).collect()
}

/// Total dollars behind a wasteful category; 0 when nothing resolves.
pub fn category_budget_total(
    catalog: &Catalog,
    mapping: &CategoryMapping,
    category: WastefulCategory,
) -> f64 {
    budget_items_for_category(catalog, mapping, category)
        .iter()
        .map(|b| b.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::BudgetTier;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                BudgetItem::new("dept-defense", "Defense", 800.0, BudgetTier::Department, 2024),
                BudgetItem::new("prog-f35", "F-35", 200.0, BudgetTier::Program, 2024),
            ],
            vec![
                ComparisonUnit::new("teacher", "Teachers", 65_000.0, "education"),
                ComparisonUnit::new("pencil", "Pencils", 1.0, "everyday"),
                ComparisonUnit::new("tutor", "Tutors", 40_000.0, "education"),
            ],
        )
    }

    fn mapping() -> CategoryMapping {
        CategoryMapping::new()
            .with_priority(PriorityCategory::Education, "education")
            .with_wasteful(WastefulCategory::Defense, &["dept-defense", "prog-f35"])
            .with_wasteful(WastefulCategory::ForeignAid, &["prog-missing"])
    }

    #[test]
    fn test_parse_category_ids() {
        assert_eq!("education".parse::<PriorityCategory>().unwrap(), PriorityCategory::Education);
        assert_eq!(
            "public-safety".parse::<PriorityCategory>().unwrap(),
            PriorityCategory::PublicSafety
        );
        assert_eq!(
            "Foreign-Aid".parse::<WastefulCategory>().unwrap(),
            WastefulCategory::ForeignAid
        );
        assert_eq!(
            "pizza".parse::<WastefulCategory>(),
            Err(ComparisonError::UnknownCategory("pizza".to_string()))
        );
    }

    #[test]
    fn test_serde_ids_match_as_str() {
        for c in PriorityCategory::ALL {
            assert_eq!(serde_json::to_value(c).unwrap(), c.as_str());
        }
        for c in WastefulCategory::ALL {
            assert_eq!(serde_json::to_value(c).unwrap(), c.as_str());
        }
    }

    #[test]
    fn test_budget_items_resolve_in_order() {
        let c = catalog();
        let ids: Vec<&str> = budget_items_for_category(&c, &mapping(), WastefulCategory::Defense)
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, vec!["dept-defense", "prog-f35"]);
    }

    #[test]
    fn test_unmapped_category_is_empty() {
        let c = catalog();
        assert!(budget_items_for_category(&c, &mapping(), WastefulCategory::Other).is_empty());
        assert!(comparison_units_for_category(&c, &mapping(), PriorityCategory::Housing).is_empty());
        assert_eq!(category_budget_total(&c, &mapping(), WastefulCategory::Other), 0.0);
    }

    #[test]
    fn test_dangling_ids_are_skipped_leniently() {
        let c = catalog();
        assert!(budget_items_for_category(&c, &mapping(), WastefulCategory::ForeignAid).is_empty());
        assert_eq!(category_budget_total(&c, &mapping(), WastefulCategory::ForeignAid), 0.0);
    }

    #[test]
    fn test_category_budget_total_sums() {
        let c = catalog();
        assert_eq!(category_budget_total(&c, &mapping(), WastefulCategory::Defense), 1000.0);
    }

    #[test]
    fn test_units_filtered_by_tag() {
        let c = catalog();
        let ids: Vec<&str> = comparison_units_for_category(&c, &mapping(), PriorityCategory::Education)
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(ids, vec!["teacher", "tutor"]);
    }

    #[test]
    fn test_resolve_distinguishes_intentional_from_missing() {
        let c = catalog();
        let m = mapping();
        assert!(resolve_budget_items(&c, &m, WastefulCategory::Other).unwrap().is_empty());
        assert_eq!(
            resolve_budget_items(&c, &m, WastefulCategory::InterestOnDebt),
            Err(ComparisonError::UnmappedCategory("interest-on-debt".to_string()))
        );
        assert_eq!(
            resolve_budget_items(&c, &m, WastefulCategory::ForeignAid),
            Err(ComparisonError::DanglingBudgetItem {
                category: "foreign-aid".to_string(),
                id: "prog-missing".to_string(),
            })
        );
        assert_eq!(resolve_budget_items(&c, &m, WastefulCategory::Defense).unwrap().len(), 2);
    }

    #[test]
    fn test_validate_reports_issues() {
        let c = catalog();
        let m = mapping().with_priority(PriorityCategory::Housing, "housing");
        let issues = m.validate(&c);

        assert!(issues.contains(&MappingIssue::DanglingBudgetItem {
            category: WastefulCategory::ForeignAid,
            id: "prog-missing".to_string(),
        }));
        assert!(issues.contains(&MappingIssue::EmptyUnitCategory {
            category: PriorityCategory::Housing,
            unit_category: "housing".to_string(),
        }));
        assert!(issues.contains(&MappingIssue::MissingPriority {
            category: PriorityCategory::Veterans
        }));
        assert!(issues.contains(&MappingIssue::MissingWasteful {
            category: WastefulCategory::InterestOnDebt
        }));
        assert!(!issues.contains(&MappingIssue::MissingWasteful {
            category: WastefulCategory::Other
        }));
    }
}
