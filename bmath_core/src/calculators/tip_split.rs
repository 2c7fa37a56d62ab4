//! # Tip & Bill Splitter
//!
//! Adds a tip to a bill and splits the total evenly. Per-person amounts are
//! left unrounded; the display layer formats them to the currency.

use serde::{Deserialize, Serialize};

use crate::calculators::LineItem;
use crate::errors::{CalcError, CalcResult};

/// Input parameters for the tip split.
///
/// ## JSON Example
///
/// ```json
/// { "bill_amount": 86.40, "tip_pct": 18.0, "people": 4 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipSplitInput {
    /// Bill amount before tip
    pub bill_amount: f64,

    /// Tip percent (clamped into [0, 100])
    pub tip_pct: f64,

    /// Number of people splitting (clamped to at least 1)
    pub people: u32,
}

impl TipSplitInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.bill_amount < 0.0 {
            return Err(CalcError::invalid_input(
                "bill_amount",
                self.bill_amount.to_string(),
                "Bill cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Results from the tip split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipSplitResult {
    /// Tip amount
    pub tip_amount: f64,

    /// Bill plus tip
    pub total_with_tip: f64,

    /// People counted after the minimum-1 clamp
    pub people_counted: u32,

    /// Even share of the total per person
    pub per_person: f64,

    /// Bill and tip as breakdown lines
    pub breakdown: Vec<LineItem>,
}

/// Calculate the tip and the per-person split.
pub fn calculate(input: &TipSplitInput) -> CalcResult<TipSplitResult> {
    input.validate()?;

    let tip_pct = input.tip_pct.clamp(0.0, 100.0);
    let people = input.people.max(1);

    let tip_amount = input.bill_amount * tip_pct / 100.0;
    let total_with_tip = input.bill_amount + tip_amount;
    let per_person = total_with_tip / people as f64;

    let breakdown = vec![
        LineItem::with_total("Bill", input.bill_amount, total_with_tip),
        LineItem::with_total("Tip", tip_amount, total_with_tip),
    ];

    Ok(TipSplitResult {
        tip_amount,
        total_with_tip,
        people_counted: people,
        per_person,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let input = TipSplitInput {
            bill_amount: 100.0,
            tip_pct: 20.0,
            people: 4,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.tip_amount, 20.0);
        assert_eq!(result.total_with_tip, 120.0);
        assert_eq!(result.per_person, 30.0);
    }

    #[test]
    fn test_zero_people_clamped() {
        let input = TipSplitInput {
            bill_amount: 50.0,
            tip_pct: 15.0,
            people: 0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.people_counted, 1);
        assert_eq!(result.per_person, result.total_with_tip);
    }

    #[test]
    fn test_tip_pct_clamped() {
        let input = TipSplitInput {
            bill_amount: 50.0,
            tip_pct: 250.0,
            people: 2,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.tip_amount, 50.0); // clamped to 100%
    }

    #[test]
    fn test_zero_bill() {
        let input = TipSplitInput {
            bill_amount: 0.0,
            tip_pct: 20.0,
            people: 3,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.total_with_tip, 0.0);
        assert_eq!(result.per_person, 0.0);
    }

    #[test]
    fn test_breakdown_adds_up() {
        let input = TipSplitInput {
            bill_amount: 86.40,
            tip_pct: 18.0,
            people: 4,
        };
        let result = calculate(&input).unwrap();
        let sum: f64 = result.breakdown.iter().map(|l| l.amount).sum();
        assert!((sum - result.total_with_tip).abs() < 1e-9);
    }
}
