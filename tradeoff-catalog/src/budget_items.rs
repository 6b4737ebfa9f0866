//! Built-in FY2024-shaped federal budget lines (mock data, rounded).

use tradeoff_core::{BudgetItem, BudgetTier};

const FY: i32 = 2024;
const OMB: &str = "OMB Historical Tables (illustrative)";
const CBO: &str = "CBO Budget and Economic Outlook (illustrative)";

fn department(id: &str, name: &str, amount: f64, description: &str) -> BudgetItem {
    BudgetItem::new(id, name, amount, BudgetTier::Department, FY)
        .with_source(OMB)
        .with_description(description)
}

fn program(id: &str, parent: &str, name: &str, amount: f64, description: &str) -> BudgetItem {
    BudgetItem::new(id, name, amount, BudgetTier::Program, FY)
        .with_parent(parent)
        .with_source(OMB)
        .with_description(description)
}

fn event(id: &str, parent: &str, name: &str, amount: f64, description: &str) -> BudgetItem {
    BudgetItem::new(id, name, amount, BudgetTier::CurrentEvent, FY)
        .with_parent(parent)
        .with_source(CBO)
        .with_description(description)
}

pub fn builtin_budget_items() -> Vec<BudgetItem> {
    vec![
        // Departments
        department("dept-defense", "Department of Defense", 842_000_000_000.0,
            "Military personnel, operations, procurement, and research"),
        department("dept-hhs", "Department of Health and Human Services", 1_720_000_000_000.0,
            "Medicare, Medicaid, public health, and social services"),
        department("dept-treasury", "Department of the Treasury", 1_050_000_000_000.0,
            "Revenue collection, debt management, and interest payments"),
        department("dept-va", "Department of Veterans Affairs", 325_000_000_000.0,
            "Veterans' healthcare, benefits, and cemeteries"),
        department("dept-agriculture", "Department of Agriculture", 213_000_000_000.0,
            "Nutrition assistance, farm programs, and forestry"),
        department("dept-transportation", "Department of Transportation", 109_000_000_000.0,
            "Highways, transit, aviation, and rail"),
        department("dept-education", "Department of Education", 79_600_000_000.0,
            "Student aid and K-12 grants"),
        department("dept-hud", "Department of Housing and Urban Development", 72_100_000_000.0,
            "Rental assistance and community development"),
        department("dept-state", "Department of State and USAID", 71_400_000_000.0,
            "Diplomacy and international assistance"),
        department("dept-energy", "Department of Energy", 51_000_000_000.0,
            "Nuclear security, energy research, and environmental cleanup"),
        department("dept-gsa", "General Services Administration", 28_500_000_000.0,
            "Federal buildings, procurement, and fleet"),
        department("dept-commerce", "Department of Commerce", 11_400_000_000.0,
            "Census, trade promotion, and weather services"),
        department("dept-nsf", "National Science Foundation", 9_060_000_000.0,
            "Basic research grants across science and engineering"),

        // Defense programs
        program("program-f35", "dept-defense", "F-35 Joint Strike Fighter", 13_800_000_000.0,
            "Procurement and sustainment of the F-35 fleet"),
        program("program-missile-defense", "dept-defense", "Missile Defense Agency", 10_400_000_000.0,
            "Ballistic missile defense systems"),
        program("program-overseas-operations", "dept-defense", "Overseas Operations", 20_000_000_000.0,
            "Contingency operations funding for overseas deployments"),
        program("program-military-bands", "dept-defense", "Military Bands", 437_000_000.0,
            "Ceremonial and recruiting musical units"),

        // State/USAID programs
        program("program-development-assistance", "dept-state", "Development Assistance", 4_400_000_000.0,
            "Economic growth and governance programs abroad"),
        program("program-foreign-military-financing", "dept-state", "Foreign Military Financing", 6_100_000_000.0,
            "Grants to foreign governments for U.S. defense equipment"),
        program("program-global-health", "dept-state", "Global Health Programs", 10_600_000_000.0,
            "HIV/AIDS, malaria, and maternal health programs abroad"),

        // Subsidies
        program("program-farm-subsidies", "dept-agriculture", "Farm Commodity Subsidies", 21_000_000_000.0,
            "Price-loss and crop insurance payments to producers"),
        program("program-sugar-program", "dept-agriculture", "Sugar Price Supports", 300_000_000.0,
            "Loan and marketing allotment program for sugar"),
        program("program-fossil-fuel-rd", "dept-energy", "Fossil Energy Research", 900_000_000.0,
            "Research funding for coal, oil, and gas technology"),
        program("program-export-import-bank", "dept-commerce", "Export-Import Bank Subsidies", 1_200_000_000.0,
            "Financing support for exporting corporations"),

        // Overhead
        program("program-federal-buildings", "dept-gsa", "Federal Buildings Fund", 10_600_000_000.0,
            "Leasing, operating, and maintaining federal office space"),
        program("program-federal-travel", "dept-gsa", "Federal Employee Travel", 2_700_000_000.0,
            "Civilian agency travel and conferences"),
        program("program-consulting-contracts", "dept-gsa", "Management Consulting Contracts", 4_300_000_000.0,
            "Professional services contracts across agencies"),

        // Interest
        program("program-net-interest", "dept-treasury", "Net Interest on the Public Debt", 882_000_000_000.0,
            "Interest paid to holders of Treasury securities"),

        // Non-wasteful programs for drill-down
        program("program-medicare", "dept-hhs", "Medicare", 874_000_000_000.0,
            "Health insurance for people 65 and older"),
        program("program-nih", "dept-hhs", "National Institutes of Health", 47_100_000_000.0,
            "Biomedical research"),
        program("program-pell-grants", "dept-education", "Pell Grants", 30_000_000_000.0,
            "Need-based grants for undergraduates"),
        program("program-highway-trust", "dept-transportation", "Federal-Aid Highways", 62_000_000_000.0,
            "Formula grants to states for roads and bridges"),
        program("program-section-8", "dept-hud", "Housing Choice Vouchers", 32_000_000_000.0,
            "Tenant-based rental assistance"),
        program("program-va-medical", "dept-va", "VA Medical Care", 121_000_000_000.0,
            "Hospitals and clinics for veterans"),

        // Current events
        event("event-carrier-ford", "dept-defense", "USS Gerald R. Ford Aircraft Carrier", 13_300_000_000.0,
            "Construction cost of the lead Ford-class carrier"),
        event("event-unused-office-space", "program-federal-buildings", "Underused Federal Office Space", 2_000_000_000.0,
            "Annual cost of maintaining largely vacant federal buildings"),
        event("event-pentagon-spare-parts", "program-f35", "Unused F-35 Spare Parts", 1_500_000_000.0,
            "Spare parts inventory flagged in audit"),
    ]
}
