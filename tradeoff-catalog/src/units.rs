//! Built-in comparison units.
//!
//! `category` tags line up with the priority mapping in `categories.rs`;
//! `everyday`, `misc`, `vehicles`, and `food` units only feed the impact scorer.

use tradeoff_core::ComparisonUnit;

fn unit(id: &str, name: &str, singular: &str, cost: f64, category: &str, icon: &str) -> ComparisonUnit {
    ComparisonUnit::new(id, name, cost, category)
        .with_singular(singular)
        .with_icon(icon)
}

pub fn builtin_units() -> Vec<ComparisonUnit> {
    vec![
        // education
        unit("teacher-salary", "Teacher Salaries", "Teacher Salary", 65_000.0, "education", "🍎")
            .with_description("Average annual public school teacher salary"),
        unit("pell-grant", "Pell Grants", "Pell Grant", 7_395.0, "education", "🎓")
            .with_description("Maximum annual Pell Grant award"),
        unit("new-school", "New Elementary Schools", "New Elementary School", 50_000_000.0, "education", "🏫"),

        // healthcare
        unit("nurse-salary", "Nurse Salaries", "Nurse Salary", 80_000.0, "healthcare", "🩺"),
        unit("insulin-year", "Years of Insulin", "Year of Insulin", 5_700.0, "healthcare", "💉")
            .with_description("One patient's insulin for a year at list price"),
        unit("community-clinic", "Community Health Clinics", "Community Health Clinic", 2_500_000.0, "healthcare", "🏥"),

        // infrastructure
        unit("bridge-repair", "Bridge Repairs", "Bridge Repair", 4_500_000.0, "infrastructure", "🌉"),
        unit("highway-mile", "Miles of Repaved Highway", "Mile of Repaved Highway", 2_500_000.0, "infrastructure", "🛣️"),
        unit("lead-pipe", "Lead Service Line Replacements", "Lead Service Line Replacement", 12_000.0, "infrastructure", "🚰"),

        // environment
        unit("home-solar", "Home Solar Installations", "Home Solar Installation", 25_000.0, "environment", "☀️"),
        unit("ev-charger", "EV Charging Stations", "EV Charging Station", 50_000.0, "environment", "🔌"),
        unit("tree-planted", "Trees Planted", "Tree Planted", 5.0, "environment", "🌳"),

        // housing
        unit("affordable-unit", "Affordable Housing Units", "Affordable Housing Unit", 300_000.0, "housing", "🏘️"),
        unit("housing-voucher", "Year-Long Housing Vouchers", "Year-Long Housing Voucher", 12_000.0, "housing", "🔑"),

        // veterans
        unit("veteran-caregiver", "Veteran Caregiver Stipends", "Veteran Caregiver Stipend", 35_000.0, "veterans", "🎖️"),
        unit("veteran-mental-health", "Veteran Mental Health Treatments", "Veteran Mental Health Treatment", 10_000.0, "veterans", "🧠"),

        // research
        unit("nih-grant", "NIH Research Grants", "NIH Research Grant", 600_000.0, "research", "🔬"),
        unit("nsf-fellowship", "NSF Graduate Fellowships", "NSF Graduate Fellowship", 53_000.0, "research", "🧪"),

        // public safety
        unit("firefighter-salary", "Firefighter Salaries", "Firefighter Salary", 55_000.0, "public-safety", "🚒"),
        unit("fire-engine", "Fire Engines", "Fire Engine", 750_000.0, "public-safety", "🚨"),

        // relatable extras
        unit("iphone", "iPhones", "iPhone", 1_000.0, "everyday", "📱"),
        unit("median-home", "Median-Priced Homes", "Median-Priced Home", 420_000.0, "everyday", "🏠"),
        unit("super-bowl-ad", "Super Bowl Ads", "Super Bowl Ad", 7_000_000.0, "misc", "🏈"),
        unit("tesla-model-3", "Tesla Model 3s", "Tesla Model 3", 45_000.0, "vehicles", "🚗"),
        ComparisonUnit::new("school-bus", "School Buses", 150_000.0, "vehicles").with_icon("🚌"),
        unit("school-lunch", "School Lunches", "School Lunch", 4.0, "food", "🥪"),
        unit("thanksgiving-dinner", "Thanksgiving Dinners", "Thanksgiving Dinner", 60.0, "food", "🦃"),
    ]
}
