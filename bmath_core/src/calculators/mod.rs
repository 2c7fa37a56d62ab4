//! # Calculators
//!
//! This module contains every calculator. Each calculator is an independent
//! leaf following the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(&input) -> Result<*Result, CalcError>` - Pure function
//!
//! Calculators never call each other and share no state. Soft bounds are
//! clamped inline (minimum one guest, percent into range); hard errors are
//! reserved for inputs with no sensible interpretation. Division-by-zero
//! cases resolve to `Option` sentinels or zero outputs, never panics.
//!
//! ## Available Calculators
//!
//! - [`batch_cost`] - Production batch costing and suggested retail price
//! - [`break_even`] - Break-even units and revenue
//! - [`consulting_rate`] - Freelance hourly/day rate
//! - [`margin_markup`] - Margin/markup converter
//! - [`loan_payment`] - Amortized loan payment
//! - [`savings_goal`] - Months to reach a savings goal
//! - [`tip_split`] - Tip and bill splitter
//! - [`party_budget`] - Event budget breakdown
//! - [`pipe_flow`] - Pipe velocity/flow/Reynolds converter
//! - [`pressure_drop`] - Darcy-Weisbach straight-pipe pressure drop
//! - [`carbonation`] - Forced-carbonation pressure
//! - [`tank_volume`] - Tank capacity and partial fill

pub mod batch_cost;
pub mod break_even;
pub mod carbonation;
pub mod consulting_rate;
pub mod loan_payment;
pub mod margin_markup;
pub mod party_budget;
pub mod pipe_flow;
pub mod pressure_drop;
pub mod savings_goal;
pub mod tank_volume;
pub mod tip_split;

use serde::{Deserialize, Serialize};

use crate::registry::Calculator;

// Re-export input/result pairs
pub use batch_cost::{BatchCostInput, BatchCostResult};
pub use break_even::{BreakEvenInput, BreakEvenResult};
pub use carbonation::{CarbonationInput, CarbonationResult};
pub use consulting_rate::{ConsultingRateInput, ConsultingRateResult};
pub use loan_payment::{LoanPaymentInput, LoanPaymentResult};
pub use margin_markup::{MarginMarkupInput, MarginMarkupResult};
pub use party_budget::{PartyBudgetInput, PartyBudgetResult};
pub use pipe_flow::{PipeFlowInput, PipeFlowResult};
pub use pressure_drop::{PressureDropInput, PressureDropResult};
pub use savings_goal::{SavingsGoalInput, SavingsGoalResult};
pub use tank_volume::{TankVolumeInput, TankVolumeResult};
pub use tip_split::{TipSplitInput, TipSplitResult};

/// One line of a result breakdown, for display.
///
/// Several calculators return a small ordered list of these (cost breakdown,
/// budget categories, bill split). Amounts are unrounded; `share_pct` is the
/// line's share of the relevant total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display label (e.g., "Ingredients", "Venue")
    pub label: String,
    /// Amount in the workbook currency (or the calculator's natural unit)
    pub amount: f64,
    /// Share of the total in percent
    pub share_pct: f64,
}

impl LineItem {
    /// Create a line item, deriving the share from the given total.
    ///
    /// A zero total yields a 0% share rather than NaN.
    pub fn with_total(label: impl Into<String>, amount: f64, total: f64) -> Self {
        let share_pct = if total != 0.0 {
            amount / total * 100.0
        } else {
            0.0
        };
        LineItem {
            label: label.into(),
            amount,
            share_pct,
        }
    }
}

/// Enum wrapper for all calculator input types.
///
/// This allows storing heterogeneous calculators in a single workbook while
/// maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculatorItem {
    /// Production batch costing
    BatchCost(BatchCostInput),
    /// Break-even analysis
    BreakEven(BreakEvenInput),
    /// Consulting rate
    ConsultingRate(ConsultingRateInput),
    /// Margin/markup converter
    MarginMarkup(MarginMarkupInput),
    /// Amortized loan payment
    LoanPayment(LoanPaymentInput),
    /// Savings goal projection
    SavingsGoal(SavingsGoalInput),
    /// Tip and bill splitter
    TipSplit(TipSplitInput),
    /// Event budget planner
    PartyBudget(PartyBudgetInput),
    /// Pipe flow converter
    PipeFlow(PipeFlowInput),
    /// Straight-pipe pressure drop
    PressureDrop(PressureDropInput),
    /// Forced-carbonation pressure
    Carbonation(CarbonationInput),
    /// Tank capacity and fill
    TankVolume(TankVolumeInput),
}

impl CalculatorItem {
    /// Which calculator this item belongs to
    pub fn calculator(&self) -> Calculator {
        match self {
            CalculatorItem::BatchCost(_) => Calculator::BatchCost,
            CalculatorItem::BreakEven(_) => Calculator::BreakEven,
            CalculatorItem::ConsultingRate(_) => Calculator::ConsultingRate,
            CalculatorItem::MarginMarkup(_) => Calculator::MarginMarkup,
            CalculatorItem::LoanPayment(_) => Calculator::LoanPayment,
            CalculatorItem::SavingsGoal(_) => Calculator::SavingsGoal,
            CalculatorItem::TipSplit(_) => Calculator::TipSplit,
            CalculatorItem::PartyBudget(_) => Calculator::PartyBudget,
            CalculatorItem::PipeFlow(_) => Calculator::PipeFlow,
            CalculatorItem::PressureDrop(_) => Calculator::PressureDrop,
            CalculatorItem::Carbonation(_) => Calculator::Carbonation,
            CalculatorItem::TankVolume(_) => Calculator::TankVolume,
        }
    }

    /// Get the calculator display name
    pub fn display_name(&self) -> &'static str {
        self.calculator().display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_share() {
        let item = LineItem::with_total("Food", 250.0, 1000.0);
        assert_eq!(item.share_pct, 25.0);

        let zero_total = LineItem::with_total("Food", 250.0, 0.0);
        assert_eq!(zero_total.share_pct, 0.0);
    }

    #[test]
    fn test_item_serialization_tag() {
        let item = CalculatorItem::BreakEven(BreakEvenInput {
            fixed_costs: 1000.0,
            unit_price: 10.0,
            unit_variable_cost: 4.0,
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"BreakEven\""));

        let roundtrip: CalculatorItem = serde_json::from_str(&json).unwrap();
        assert!(matches!(roundtrip, CalculatorItem::BreakEven(_)));
    }

    #[test]
    fn test_item_calculator_mapping() {
        let item = CalculatorItem::TipSplit(TipSplitInput {
            bill_amount: 60.0,
            tip_pct: 20.0,
            people: 3,
        });
        assert_eq!(item.calculator(), Calculator::TipSplit);
        assert_eq!(item.display_name(), "Tip & Bill Splitter");
    }
}
