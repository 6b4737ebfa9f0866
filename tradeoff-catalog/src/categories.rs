//! Category cards shown in the wizard and the tables behind them.

use tradeoff_core::{CategoryDefinition, CategoryMapping, PriorityCategory, WastefulCategory};

pub fn priority_definitions() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition::new("education", "Education", "Teachers, schools, and student aid", "🎓"),
        CategoryDefinition::new("healthcare", "Healthcare", "Nurses, clinics, and affordable medicine", "🏥"),
        CategoryDefinition::new("infrastructure", "Infrastructure", "Roads, bridges, and clean water", "🌉"),
        CategoryDefinition::new("environment", "Environment", "Clean energy and conservation", "🌳"),
        CategoryDefinition::new("housing", "Housing", "Affordable homes and rental help", "🏘️"),
        CategoryDefinition::new("veterans", "Veterans", "Care and support for those who served", "🎖️"),
        CategoryDefinition::new("research", "Scientific Research", "Grants for science and medicine", "🔬"),
        CategoryDefinition::new("public-safety", "Public Safety", "Firefighters and emergency response", "🚒"),
    ]
}

pub fn wasteful_definitions() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition::new("defense", "Defense Spending", "Weapons programs and overseas operations", "🛡️"),
        CategoryDefinition::new("foreign-aid", "Foreign Aid", "Assistance to other countries", "🌍"),
        CategoryDefinition::new("corporate-subsidies", "Corporate Subsidies", "Payments and support to industry", "🏭"),
        CategoryDefinition::new("administrative-overhead", "Administrative Overhead", "Office space, travel, and consultants", "📎"),
        CategoryDefinition::new("interest-on-debt", "Interest on Debt", "Interest paid on federal borrowing", "💸"),
        CategoryDefinition::new("other", "Something Else", "Spending not listed here", "❓"),
    ]
}

/// Built-in tables. `other` has no entry.
pub fn builtin_mapping() -> CategoryMapping {
    CategoryMapping::new()
        .with_priority(PriorityCategory::Education, "education")
        .with_priority(PriorityCategory::Healthcare, "healthcare")
        .with_priority(PriorityCategory::Infrastructure, "infrastructure")
        .with_priority(PriorityCategory::Environment, "environment")
        .with_priority(PriorityCategory::Housing, "housing")
        .with_priority(PriorityCategory::Veterans, "veterans")
        .with_priority(PriorityCategory::Research, "research")
        .with_priority(PriorityCategory::PublicSafety, "public-safety")
        .with_wasteful(
            WastefulCategory::Defense,
            &[
                "program-f35",
                "program-missile-defense",
                "program-overseas-operations",
                "program-military-bands",
                "event-carrier-ford",
            ],
        )
        .with_wasteful(
            WastefulCategory::ForeignAid,
            &[
                "program-development-assistance",
                "program-foreign-military-financing",
                "program-global-health",
            ],
        )
        .with_wasteful(
            WastefulCategory::CorporateSubsidies,
            &[
                "program-farm-subsidies",
                "program-sugar-program",
                "program-fossil-fuel-rd",
                "program-export-import-bank",
            ],
        )
        .with_wasteful(
            WastefulCategory::AdministrativeOverhead,
            &[
                "program-federal-buildings",
                "program-federal-travel",
                "program-consulting-contracts",
                "event-unused-office-space",
            ],
        )
        .with_wasteful(WastefulCategory::InterestOnDebt, &["program-net-interest"])
}
