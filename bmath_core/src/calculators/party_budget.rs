//! # Party Budget Calculator
//!
//! Splits an event budget across spending categories, either from an event
//! preset or from a custom percentage split. Percentages are applied as
//! given; whatever they leave unallocated (or overshoot) is reported as the
//! remainder so the planner can see it.

use serde::{Deserialize, Serialize};

use crate::calculators::LineItem;
use crate::errors::{CalcError, CalcResult};
use crate::presets::{BudgetSplit, EventType};

/// Where the category split comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SplitChoice {
    /// Use the preset split for an event type
    Preset { event: EventType },
    /// Supply explicit percentages
    Custom { split: BudgetSplit },
}

/// Input parameters for the party budget.
///
/// ## JSON Example (preset)
///
/// ```json
/// {
///   "guests": 30,
///   "total_budget": 1500.0,
///   "split": { "type": "Preset", "event": "Birthday" }
/// }
/// ```
///
/// ## JSON Example (custom split)
///
/// ```json
/// {
///   "guests": 30,
///   "total_budget": 1500.0,
///   "split": {
///     "type": "Custom",
///     "split": {
///       "food_pct": 45.0, "drinks_pct": 25.0, "venue_pct": 0.0,
///       "decor_pct": 15.0, "entertainment_pct": 15.0
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyBudgetInput {
    /// Guest count (clamped to at least 1)
    pub guests: u32,

    /// Total budget for the event
    pub total_budget: f64,

    /// Category split source
    pub split: SplitChoice,
}

impl PartyBudgetInput {
    /// Validate input parameters.
    ///
    /// A split whose categories are all zero is rejected; there is nothing
    /// sensible to allocate.
    pub fn validate(&self) -> CalcResult<()> {
        if self.total_budget < 0.0 {
            return Err(CalcError::invalid_input(
                "total_budget",
                self.total_budget.to_string(),
                "Budget cannot be negative",
            ));
        }
        if self.effective_split().total_pct() <= 0.0 {
            return Err(CalcError::invalid_input(
                "split",
                "0",
                "At least one category percent must be positive",
            ));
        }
        Ok(())
    }

    /// The split in effect, with each custom percent clamped into [0, 100]
    pub fn effective_split(&self) -> BudgetSplit {
        match &self.split {
            SplitChoice::Preset { event } => event.budget_split(),
            SplitChoice::Custom { split } => BudgetSplit {
                food_pct: split.food_pct.clamp(0.0, 100.0),
                drinks_pct: split.drinks_pct.clamp(0.0, 100.0),
                venue_pct: split.venue_pct.clamp(0.0, 100.0),
                decor_pct: split.decor_pct.clamp(0.0, 100.0),
                entertainment_pct: split.entertainment_pct.clamp(0.0, 100.0),
            },
        }
    }
}

/// Results from the party budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyBudgetResult {
    /// Guests used after the minimum-1 clamp
    pub guests_counted: u32,

    /// Budget per guest
    pub per_guest_budget: f64,

    /// Ordered category allocations
    pub categories: Vec<LineItem>,

    /// Sum of the category allocations
    pub total_allocated: f64,

    /// Budget minus allocations; negative means the split overshoots 100%
    pub remainder: f64,
}

/// Allocate the budget across categories.
pub fn calculate(input: &PartyBudgetInput) -> CalcResult<PartyBudgetResult> {
    input.validate()?;

    let guests = input.guests.max(1);
    let split = input.effective_split();

    let categories: Vec<LineItem> = split
        .categories()
        .iter()
        .map(|(label, pct)| LineItem {
            label: (*label).to_string(),
            amount: input.total_budget * pct / 100.0,
            share_pct: *pct,
        })
        .collect();

    let total_allocated: f64 = categories.iter().map(|l| l.amount).sum();

    Ok(PartyBudgetResult {
        guests_counted: guests,
        per_guest_budget: input.total_budget / guests as f64,
        categories,
        total_allocated,
        remainder: input.total_budget - total_allocated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset_input() -> PartyBudgetInput {
        PartyBudgetInput {
            guests: 30,
            total_budget: 1_500.0,
            split: SplitChoice::Preset {
                event: EventType::Birthday,
            },
        }
    }

    #[test]
    fn test_preset_allocates_full_budget() {
        let result = calculate(&preset_input()).unwrap();
        // Presets sum to 100%, so nothing is left over
        assert!((result.total_allocated - 1_500.0).abs() < 1e-9);
        assert!(result.remainder.abs() < 1e-9);
        assert_eq!(result.categories.len(), 5);
    }

    #[test]
    fn test_per_guest() {
        let result = calculate(&preset_input()).unwrap();
        assert_eq!(result.per_guest_budget, 50.0);
    }

    #[test]
    fn test_birthday_food_share() {
        let result = calculate(&preset_input()).unwrap();
        let food = &result.categories[0];
        assert_eq!(food.label, "Food");
        assert_eq!(food.amount, 600.0); // 40% of 1500
    }

    #[test]
    fn test_custom_split_remainder() {
        let input = PartyBudgetInput {
            guests: 10,
            total_budget: 1_000.0,
            split: SplitChoice::Custom {
                split: BudgetSplit {
                    food_pct: 40.0,
                    drinks_pct: 20.0,
                    venue_pct: 0.0,
                    decor_pct: 10.0,
                    entertainment_pct: 10.0,
                },
            },
        };
        let result = calculate(&input).unwrap();
        // 80% allocated, 20% left to assign
        assert!((result.total_allocated - 800.0).abs() < 1e-9);
        assert!((result.remainder - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_overshoot_split_negative_remainder() {
        let input = PartyBudgetInput {
            guests: 10,
            total_budget: 1_000.0,
            split: SplitChoice::Custom {
                split: BudgetSplit {
                    food_pct: 60.0,
                    drinks_pct: 60.0,
                    venue_pct: 0.0,
                    decor_pct: 0.0,
                    entertainment_pct: 0.0,
                },
            },
        };
        let result = calculate(&input).unwrap();
        assert!(result.remainder < 0.0);
    }

    #[test]
    fn test_zero_split_rejected() {
        let input = PartyBudgetInput {
            guests: 10,
            total_budget: 1_000.0,
            split: SplitChoice::Custom {
                split: BudgetSplit {
                    food_pct: 0.0,
                    drinks_pct: 0.0,
                    venue_pct: 0.0,
                    decor_pct: 0.0,
                    entertainment_pct: 0.0,
                },
            },
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_zero_guests_clamped() {
        let mut input = preset_input();
        input.guests = 0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.guests_counted, 1);
        assert!(result.per_guest_budget.is_finite());
    }

    #[test]
    fn test_percent_clamped() {
        let input = PartyBudgetInput {
            guests: 5,
            total_budget: 100.0,
            split: SplitChoice::Custom {
                split: BudgetSplit {
                    food_pct: 150.0, // clamped to 100
                    drinks_pct: -20.0, // clamped to 0
                    venue_pct: 0.0,
                    decor_pct: 0.0,
                    entertainment_pct: 0.0,
                },
            },
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.categories[0].amount, 100.0);
        assert_eq!(result.categories[1].amount, 0.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = preset_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        assert!(json.contains("\"type\": \"Preset\""));
        let roundtrip: PartyBudgetInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.guests, roundtrip.guests);
    }
}
