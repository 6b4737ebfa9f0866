//! Comparison units: real-world reference costs used as denominators.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonUnit {
    pub id: String,
    /// Plural display name, e.g. "Teacher Salaries"
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_singular: Option<String>,
    /// USD per unit
    pub cost_per_unit: f64,
    /// Free-form grouping tag ("education", "everyday", ...)
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ComparisonUnit {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cost_per_unit: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_singular: None,
            cost_per_unit,
            category: category.into(),
            description: None,
            icon: None,
        }
    }

    pub fn with_singular(mut self, singular: impl Into<String>) -> Self {
        self.name_singular = Some(singular.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn has_valid_cost(&self) -> bool {
        self.cost_per_unit.is_finite() && self.cost_per_unit > 0.0
    }

    /// Noun for a count: singular at exactly 1, plural otherwise.
    ///
    /// Returns `None` at exactly 1 when no singular name is set; callers
    /// render that as a missing label rather than guessing a singular form.
    pub fn label_for(&self, count: f64) -> Option<&str> {
        if count == 1.0 {
            self.name_singular.as_deref()
        } else {
            Some(self.name.as_str())
        }
    }

    /// Singular name, falling back to the plural one.
    pub fn singular_or_name(&self) -> &str {
        self.name_singular.as_deref().unwrap_or(&self.name)
    }
}
