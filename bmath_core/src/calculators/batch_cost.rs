//! # Batch Cost Calculator
//!
//! Costs a production batch (food, soap, candles, small manufacturing) and
//! suggests a retail price from a target margin.
//!
//! ## Assumptions
//!
//! - Ingredient/material and labor costs are per batch
//! - Packaging cost is per unit
//! - Overhead is a percentage markup on direct costs
//! - Suggested retail uses margin pricing: price = cost / (1 - margin)
//!
//! ## Example
//!
//! ```rust
//! use bmath_core::calculators::batch_cost::{BatchCostInput, calculate};
//!
//! let input = BatchCostInput {
//!     units_produced: 48,
//!     ingredient_cost: 62.40,
//!     labor_hours: 3.0,
//!     labor_rate_per_hour: 18.0,
//!     packaging_cost_per_unit: 0.35,
//!     overhead_pct: 15.0,
//!     target_margin_pct: 60.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.suggested_retail_price > result.cost_per_unit);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculators::LineItem;
use crate::errors::{CalcError, CalcResult};

/// Margin is capped just under 100% so the price formula stays finite
const MAX_MARGIN_PCT: f64 = 99.9;

/// Input parameters for batch costing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "units_produced": 48,
///   "ingredient_cost": 62.40,
///   "labor_hours": 3.0,
///   "labor_rate_per_hour": 18.0,
///   "packaging_cost_per_unit": 0.35,
///   "overhead_pct": 15.0,
///   "target_margin_pct": 60.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCostInput {
    /// Units produced per batch (clamped to at least 1)
    pub units_produced: u32,

    /// Ingredient/raw material cost for the whole batch
    pub ingredient_cost: f64,

    /// Labor hours spent on the batch
    pub labor_hours: f64,

    /// Labor rate per hour
    pub labor_rate_per_hour: f64,

    /// Packaging cost per unit
    pub packaging_cost_per_unit: f64,

    /// Overhead as a percent of direct costs (clamped into [0, 100])
    pub overhead_pct: f64,

    /// Target gross margin percent (clamped into [0, 99.9])
    pub target_margin_pct: f64,
}

impl BatchCostInput {
    /// Validate input parameters.
    ///
    /// Negative money amounts are rejected; percentages and unit counts are
    /// clamped at calculation time instead.
    pub fn validate(&self) -> CalcResult<()> {
        if self.ingredient_cost < 0.0 {
            return Err(CalcError::invalid_input(
                "ingredient_cost",
                self.ingredient_cost.to_string(),
                "Cost cannot be negative",
            ));
        }
        if self.labor_hours < 0.0 {
            return Err(CalcError::invalid_input(
                "labor_hours",
                self.labor_hours.to_string(),
                "Hours cannot be negative",
            ));
        }
        if self.labor_rate_per_hour < 0.0 {
            return Err(CalcError::invalid_input(
                "labor_rate_per_hour",
                self.labor_rate_per_hour.to_string(),
                "Rate cannot be negative",
            ));
        }
        if self.packaging_cost_per_unit < 0.0 {
            return Err(CalcError::invalid_input(
                "packaging_cost_per_unit",
                self.packaging_cost_per_unit.to_string(),
                "Cost cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Results from batch costing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCostResult {
    /// Units used for per-unit figures (after the minimum-1 clamp)
    pub units_costed: u32,

    /// Total cost of the batch including overhead
    pub total_batch_cost: f64,

    /// Cost per unit
    pub cost_per_unit: f64,

    /// Suggested retail price at the target margin
    pub suggested_retail_price: f64,

    /// Profit per unit at the suggested price
    pub profit_per_unit: f64,

    /// Margin percent actually applied (after clamping)
    pub margin_pct_applied: f64,

    /// Cost breakdown: ingredients, labor, packaging, overhead
    pub breakdown: Vec<LineItem>,
}

/// Calculate batch cost and suggested retail price.
///
/// # Arguments
///
/// * `input` - Batch parameters (units, costs, overhead, target margin)
///
/// # Returns
///
/// * `Ok(BatchCostResult)` - Costs, suggested price, and breakdown
/// * `Err(CalcError)` - Structured error if a money amount is negative
pub fn calculate(input: &BatchCostInput) -> CalcResult<BatchCostResult> {
    input.validate()?;

    // Soft clamps
    let units = input.units_produced.max(1);
    let overhead_pct = input.overhead_pct.clamp(0.0, 100.0);
    let margin_pct = input.target_margin_pct.clamp(0.0, MAX_MARGIN_PCT);

    let labor_cost = input.labor_hours * input.labor_rate_per_hour;
    let packaging_cost = input.packaging_cost_per_unit * units as f64;
    let direct_cost = input.ingredient_cost + labor_cost + packaging_cost;
    let overhead_cost = direct_cost * overhead_pct / 100.0;
    let total_batch_cost = direct_cost + overhead_cost;

    let cost_per_unit = total_batch_cost / units as f64;
    let suggested_retail_price = cost_per_unit / (1.0 - margin_pct / 100.0);
    let profit_per_unit = suggested_retail_price - cost_per_unit;

    let breakdown = vec![
        LineItem::with_total("Ingredients", input.ingredient_cost, total_batch_cost),
        LineItem::with_total("Labor", labor_cost, total_batch_cost),
        LineItem::with_total("Packaging", packaging_cost, total_batch_cost),
        LineItem::with_total("Overhead", overhead_cost, total_batch_cost),
    ];

    Ok(BatchCostResult {
        units_costed: units,
        total_batch_cost,
        cost_per_unit,
        suggested_retail_price,
        profit_per_unit,
        margin_pct_applied: margin_pct,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_batch() -> BatchCostInput {
        BatchCostInput {
            units_produced: 48,
            ingredient_cost: 62.40,
            labor_hours: 3.0,
            labor_rate_per_hour: 18.0,
            packaging_cost_per_unit: 0.35,
            overhead_pct: 15.0,
            target_margin_pct: 60.0,
        }
    }

    #[test]
    fn test_total_cost() {
        let result = calculate(&test_batch()).unwrap();
        // direct = 62.40 + 54.00 + 16.80 = 133.20; overhead = 19.98
        assert!((result.total_batch_cost - 153.18).abs() < 0.01);
        assert!((result.cost_per_unit - 153.18 / 48.0).abs() < 0.001);
    }

    #[test]
    fn test_suggested_price_covers_margin() {
        let result = calculate(&test_batch()).unwrap();
        // price = cost / (1 - 0.60); margin of the price should be 60%
        let realized_margin =
            (result.suggested_retail_price - result.cost_per_unit) / result.suggested_retail_price;
        assert!((realized_margin - 0.60).abs() < 1e-9);
    }

    #[test]
    fn test_margin_monotonicity() {
        // Increasing target margin strictly increases the suggested price
        let mut input = test_batch();
        let mut last_price = 0.0;
        for margin in [0.0, 20.0, 40.0, 60.0, 80.0] {
            input.target_margin_pct = margin;
            let price = calculate(&input).unwrap().suggested_retail_price;
            assert!(price > last_price, "margin {} gave price {}", margin, price);
            last_price = price;
        }
    }

    #[test]
    fn test_zero_units_clamped() {
        let mut input = test_batch();
        input.units_produced = 0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.units_costed, 1);
        assert!(result.cost_per_unit.is_finite());
    }

    #[test]
    fn test_extreme_margin_clamped() {
        let mut input = test_batch();
        input.target_margin_pct = 150.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.margin_pct_applied, 99.9);
        assert!(result.suggested_retail_price.is_finite());
    }

    #[test]
    fn test_zero_cost_batch() {
        let input = BatchCostInput {
            units_produced: 10,
            ingredient_cost: 0.0,
            labor_hours: 0.0,
            labor_rate_per_hour: 0.0,
            packaging_cost_per_unit: 0.0,
            overhead_pct: 0.0,
            target_margin_pct: 50.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.total_batch_cost, 0.0);
        assert_eq!(result.suggested_retail_price, 0.0);
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut input = test_batch();
        input.ingredient_cost = -5.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_breakdown_shares_sum() {
        let result = calculate(&test_batch()).unwrap();
        let total_pct: f64 = result.breakdown.iter().map(|l| l.share_pct).sum();
        assert!((total_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_determinism() {
        let input = test_batch();
        let a = calculate(&input).unwrap();
        let b = calculate(&input).unwrap();
        assert_eq!(a.total_batch_cost, b.total_batch_cost);
        assert_eq!(a.suggested_retail_price, b.suggested_retail_price);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_batch();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: BatchCostInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.units_produced, roundtrip.units_produced);
        assert_eq!(input.target_margin_pct, roundtrip.target_margin_pct);
    }
}
