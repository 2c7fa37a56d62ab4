//! # Calculator Registry
//!
//! Central index of every calculator: slug, display name, category, and a
//! one-line description. The registry drives the CLI menu, share links, and
//! report headers.
//!
//! ## Usage
//!
//! ```rust
//! use bmath_core::registry::Calculator;
//!
//! let calc = Calculator::PressureDrop;
//! assert_eq!(calc.slug(), "pressure-drop");
//! assert_eq!(
//!     calc.url("https://boring-math.com"),
//!     "https://boring-math.com/calculators/pressure-drop"
//! );
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Categories for grouping calculators in menus and listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorCategory {
    /// Pricing and small-business tools
    Business,
    /// Personal finance tools
    Money,
    /// Event planning tools
    Events,
    /// Fluid and geometry tools
    Engineering,
    /// Brewing tools
    Homebrew,
}

impl CalculatorCategory {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculatorCategory::Business => "Business",
            CalculatorCategory::Money => "Money",
            CalculatorCategory::Events => "Events",
            CalculatorCategory::Engineering => "Engineering",
            CalculatorCategory::Homebrew => "Homebrew",
        }
    }
}

impl std::fmt::Display for CalculatorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Every calculator in the suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Calculator {
    BatchCost,
    BreakEven,
    ConsultingRate,
    MarginMarkup,
    LoanPayment,
    SavingsGoal,
    TipSplit,
    PartyBudget,
    PipeFlow,
    PressureDrop,
    Carbonation,
    TankVolume,
}

/// Slug-keyed index built once for `from_slug`
static SLUG_INDEX: Lazy<HashMap<&'static str, Calculator>> = Lazy::new(|| {
    Calculator::ALL.iter().map(|c| (c.slug(), *c)).collect()
});

impl Calculator {
    /// All calculators, in menu order
    pub const ALL: [Calculator; 12] = [
        Calculator::BatchCost,
        Calculator::BreakEven,
        Calculator::ConsultingRate,
        Calculator::MarginMarkup,
        Calculator::LoanPayment,
        Calculator::SavingsGoal,
        Calculator::TipSplit,
        Calculator::PartyBudget,
        Calculator::PipeFlow,
        Calculator::PressureDrop,
        Calculator::Carbonation,
        Calculator::TankVolume,
    ];

    /// URL slug, also used as the stable identifier in share links
    pub fn slug(&self) -> &'static str {
        match self {
            Calculator::BatchCost => "batch-cost",
            Calculator::BreakEven => "break-even",
            Calculator::ConsultingRate => "consulting-rate",
            Calculator::MarginMarkup => "margin-markup",
            Calculator::LoanPayment => "loan-payment",
            Calculator::SavingsGoal => "savings-goal",
            Calculator::TipSplit => "tip-split",
            Calculator::PartyBudget => "party-budget",
            Calculator::PipeFlow => "pipe-flow",
            Calculator::PressureDrop => "pressure-drop",
            Calculator::Carbonation => "carbonation",
            Calculator::TankVolume => "tank-volume",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Calculator::BatchCost => "Batch Cost Calculator",
            Calculator::BreakEven => "Break-Even Calculator",
            Calculator::ConsultingRate => "Consulting Rate Calculator",
            Calculator::MarginMarkup => "Margin & Markup Converter",
            Calculator::LoanPayment => "Loan Payment Calculator",
            Calculator::SavingsGoal => "Savings Goal Calculator",
            Calculator::TipSplit => "Tip & Bill Splitter",
            Calculator::PartyBudget => "Party Budget Planner",
            Calculator::PipeFlow => "Pipe Flow Calculator",
            Calculator::PressureDrop => "Pipe Pressure Drop Calculator",
            Calculator::Carbonation => "Keg Carbonation Calculator",
            Calculator::TankVolume => "Tank Volume Calculator",
        }
    }

    /// Category for menu grouping
    pub fn category(&self) -> CalculatorCategory {
        match self {
            Calculator::BatchCost
            | Calculator::BreakEven
            | Calculator::ConsultingRate
            | Calculator::MarginMarkup => CalculatorCategory::Business,
            Calculator::LoanPayment | Calculator::SavingsGoal | Calculator::TipSplit => {
                CalculatorCategory::Money
            }
            Calculator::PartyBudget => CalculatorCategory::Events,
            Calculator::PipeFlow | Calculator::PressureDrop | Calculator::TankVolume => {
                CalculatorCategory::Engineering
            }
            Calculator::Carbonation => CalculatorCategory::Homebrew,
        }
    }

    /// One-line description for menus and share text
    pub fn description(&self) -> &'static str {
        match self {
            Calculator::BatchCost => "Cost a production batch and price it for a target margin",
            Calculator::BreakEven => "Units and revenue needed to cover fixed costs",
            Calculator::ConsultingRate => "Hourly rate from a target income and billable hours",
            Calculator::MarginMarkup => "Convert between gross margin and markup",
            Calculator::LoanPayment => "Monthly payment and total interest for an amortized loan",
            Calculator::SavingsGoal => "Months until a savings goal is reached",
            Calculator::TipSplit => "Add a tip and split the bill evenly",
            Calculator::PartyBudget => "Split an event budget across spending categories",
            Calculator::PipeFlow => "Velocity, flow, and Reynolds number for a full pipe",
            Calculator::PressureDrop => "Darcy-Weisbach pressure drop for a straight pipe",
            Calculator::Carbonation => "Regulator pressure for a target CO2 level",
            Calculator::TankVolume => "Tank capacity and partial-fill volume",
        }
    }

    /// Full URL of this calculator on the site
    pub fn url(&self, site_base: &str) -> String {
        format!("{}/calculators/{}", site_base.trim_end_matches('/'), self.slug())
    }

    /// Look up a calculator by its slug
    pub fn from_slug(slug: &str) -> CalcResult<Self> {
        SLUG_INDEX
            .get(slug.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| CalcError::preset_not_found(slug))
    }
}

impl std::fmt::Display for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_unique() {
        let mut seen = std::collections::HashSet::new();
        for calc in Calculator::ALL {
            assert!(seen.insert(calc.slug()), "duplicate slug {}", calc.slug());
        }
    }

    #[test]
    fn test_from_slug() {
        assert_eq!(
            Calculator::from_slug("pressure-drop").unwrap(),
            Calculator::PressureDrop
        );
        assert_eq!(
            Calculator::from_slug("  Batch-Cost ").unwrap(),
            Calculator::BatchCost
        );
        assert!(Calculator::from_slug("nope").is_err());
    }

    #[test]
    fn test_url() {
        assert_eq!(
            Calculator::TipSplit.url("https://boring-math.com/"),
            "https://boring-math.com/calculators/tip-split"
        );
    }

    #[test]
    fn test_every_calculator_has_category_and_description() {
        for calc in Calculator::ALL {
            assert!(!calc.description().is_empty());
            assert!(!calc.category().display_name().is_empty());
        }
    }
}
