//! # Margin/Markup Converter
//!
//! Converts between gross margin (profit as a share of price) and markup
//! (profit as a share of cost), and prices a unit from either. The two are
//! related by `markup = margin / (1 - margin)` in fractional terms — a
//! perennial source of pricing mistakes.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

const MAX_MARGIN_PCT: f64 = 99.9;

/// Which percentage the input supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingBasis {
    /// Percent is a gross margin (share of selling price)
    Margin,
    /// Percent is a markup (share of cost)
    Markup,
}

/// Input parameters for the margin/markup conversion.
///
/// ## JSON Example
///
/// ```json
/// { "unit_cost": 40.0, "basis": "Margin", "percent": 60.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginMarkupInput {
    /// Cost per unit
    pub unit_cost: f64,

    /// Interpretation of `percent`
    pub basis: PricingBasis,

    /// Margin percent (clamped into [0, 99.9]) or markup percent (clamped to >= 0)
    pub percent: f64,
}

impl MarginMarkupInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.unit_cost < 0.0 {
            return Err(CalcError::invalid_input(
                "unit_cost",
                self.unit_cost.to_string(),
                "Cost cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Results from the margin/markup conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginMarkupResult {
    /// Selling price per unit
    pub selling_price: f64,

    /// Gross margin percent of the selling price
    pub margin_pct: f64,

    /// Markup percent over cost
    pub markup_pct: f64,

    /// Profit per unit
    pub gross_profit: f64,
}

/// Convert between margin and markup and price the unit.
pub fn calculate(input: &MarginMarkupInput) -> CalcResult<MarginMarkupResult> {
    input.validate()?;

    let (margin_frac, markup_frac) = match input.basis {
        PricingBasis::Margin => {
            let m = input.percent.clamp(0.0, MAX_MARGIN_PCT) / 100.0;
            (m, m / (1.0 - m))
        }
        PricingBasis::Markup => {
            let k = input.percent.max(0.0) / 100.0;
            (k / (1.0 + k), k)
        }
    };

    let selling_price = input.unit_cost * (1.0 + markup_frac);

    Ok(MarginMarkupResult {
        selling_price,
        margin_pct: margin_frac * 100.0,
        markup_pct: markup_frac * 100.0,
        gross_profit: selling_price - input.unit_cost,
    })
}
