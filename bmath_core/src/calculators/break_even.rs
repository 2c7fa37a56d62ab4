//! # Break-Even Calculator
//!
//! Classic break-even analysis: how many units must be sold before fixed
//! costs are covered.
//!
//! When the unit price does not exceed the unit variable cost there is no
//! break-even point; the result carries `None` (serialized as `null`)
//! rather than an error or a magic number.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input parameters for break-even analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fixed_costs": 12000.0,
///   "unit_price": 25.0,
///   "unit_variable_cost": 10.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakEvenInput {
    /// Fixed costs for the period (rent, salaries, insurance)
    pub fixed_costs: f64,

    /// Selling price per unit
    pub unit_price: f64,

    /// Variable cost per unit (materials, shipping, fees)
    pub unit_variable_cost: f64,
}

impl BreakEvenInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.fixed_costs < 0.0 {
            return Err(CalcError::invalid_input(
                "fixed_costs",
                self.fixed_costs.to_string(),
                "Fixed costs cannot be negative",
            ));
        }
        if self.unit_price < 0.0 {
            return Err(CalcError::invalid_input(
                "unit_price",
                self.unit_price.to_string(),
                "Price cannot be negative",
            ));
        }
        if self.unit_variable_cost < 0.0 {
            return Err(CalcError::invalid_input(
                "unit_variable_cost",
                self.unit_variable_cost.to_string(),
                "Variable cost cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Results from break-even analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakEvenResult {
    /// Contribution margin per unit: price - variable cost
    pub contribution_margin: f64,

    /// Contribution margin as a fraction of price (`None` when price is 0)
    pub contribution_margin_ratio: Option<f64>,

    /// Units to break even (unrounded; `None` when the margin is <= 0)
    pub break_even_units: Option<f64>,

    /// Revenue at the break-even point (`None` when undefined)
    pub break_even_revenue: Option<f64>,
}

impl BreakEvenResult {
    /// Whole units to sell: break-even units rounded up for display
    pub fn units_to_sell(&self) -> Option<u64> {
        self.break_even_units.map(|u| u.ceil() as u64)
    }
}

/// Calculate the break-even point.
pub fn calculate(input: &BreakEvenInput) -> CalcResult<BreakEvenResult> {
    input.validate()?;

    let contribution_margin = input.unit_price - input.unit_variable_cost;
    let contribution_margin_ratio = if input.unit_price > 0.0 {
        Some(contribution_margin / input.unit_price)
    } else {
        None
    };

    // No break-even point when each sale loses money (or breaks exactly even)
    let (break_even_units, break_even_revenue) = if contribution_margin > 0.0 {
        let units = input.fixed_costs / contribution_margin;
        (Some(units), Some(units * input.unit_price))
    } else {
        (None, None)
    };

    Ok(BreakEvenResult {
        contribution_margin,
        contribution_margin_ratio,
        break_even_units,
        break_even_revenue,
    })
}
