//! # Savings Goal Calculator
//!
//! How long until a savings goal is reached, given a starting balance, a
//! monthly contribution, and an annual yield. Uses the closed-form future
//! value inversion when yield is positive and simple division when it is
//! zero. Goals that can never be reached produce a `None` sentinel.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Projection cap: goals further out than 100 years count as unreachable
const MAX_MONTHS: f64 = 1200.0;

/// Input parameters for the savings goal projection.
///
/// ## JSON Example
///
/// ```json
/// {
///   "goal_amount": 20000.0,
///   "starting_balance": 2500.0,
///   "monthly_contribution": 400.0,
///   "annual_yield_pct": 4.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoalInput {
    /// Target balance
    pub goal_amount: f64,

    /// Balance already saved
    pub starting_balance: f64,

    /// Contribution added at the end of each month
    pub monthly_contribution: f64,

    /// Annual yield in percent (compounded monthly)
    pub annual_yield_pct: f64,
}

impl SavingsGoalInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.goal_amount < 0.0 {
            return Err(CalcError::invalid_input(
                "goal_amount",
                self.goal_amount.to_string(),
                "Goal cannot be negative",
            ));
        }
        if self.starting_balance < 0.0 {
            return Err(CalcError::invalid_input(
                "starting_balance",
                self.starting_balance.to_string(),
                "Balance cannot be negative",
            ));
        }
        if self.monthly_contribution < 0.0 {
            return Err(CalcError::invalid_input(
                "monthly_contribution",
                self.monthly_contribution.to_string(),
                "Contribution cannot be negative",
            ));
        }
        if self.annual_yield_pct < 0.0 {
            return Err(CalcError::invalid_input(
                "annual_yield_pct",
                self.annual_yield_pct.to_string(),
                "Yield cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Results from the savings goal projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoalResult {
    /// Months until the goal is reached, rounded up to whole months
    /// (`None` when the goal is unreachable)
    pub months_to_goal: Option<u32>,

    /// Total contributed over those months (`None` when unreachable)
    pub total_contributed: Option<f64>,

    /// Interest earned by the time the goal is reached (`None` when unreachable)
    pub interest_earned: Option<f64>,

    /// Projected balance at the end of the final month (`None` when unreachable)
    pub projected_balance: Option<f64>,
}

/// Project the months needed to reach the savings goal.
pub fn calculate(input: &SavingsGoalInput) -> CalcResult<SavingsGoalResult> {
    input.validate()?;

    // Already there
    if input.starting_balance >= input.goal_amount {
        return Ok(SavingsGoalResult {
            months_to_goal: Some(0),
            total_contributed: Some(0.0),
            interest_earned: Some(0.0),
            projected_balance: Some(input.starting_balance),
        });
    }

    let i = input.annual_yield_pct / 100.0 / 12.0;
    let c = input.monthly_contribution;
    let b = input.starting_balance;
    let goal = input.goal_amount;

    let raw_months = if i == 0.0 {
        if c <= 0.0 {
            return Ok(unreachable_result());
        }
        (goal - b) / c
    } else {
        // FV(n) = b(1+i)^n + c((1+i)^n - 1)/i ; solve FV(n) = goal for n
        let numerator = goal * i + c;
        let denominator = b * i + c;
        if denominator <= 0.0 {
            return Ok(unreachable_result());
        }
        (numerator / denominator).ln() / (1.0 + i).ln()
    };

    if !raw_months.is_finite() || raw_months > MAX_MONTHS {
        return Ok(unreachable_result());
    }

    let months = raw_months.ceil().max(0.0) as u32;
    let n = months as f64;

    let projected_balance = if i == 0.0 {
        b + c * n
    } else {
        b * (1.0 + i).powf(n) + c * ((1.0 + i).powf(n) - 1.0) / i
    };

    let total_contributed = c * n;
    let interest_earned = projected_balance - b - total_contributed;

    Ok(SavingsGoalResult {
        months_to_goal: Some(months),
        total_contributed: Some(total_contributed),
        interest_earned: Some(interest_earned),
        projected_balance: Some(projected_balance),
    })
}

fn unreachable_result() -> SavingsGoalResult {
    SavingsGoalResult {
        months_to_goal: None,
        total_contributed: None,
        interest_earned: None,
        projected_balance: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_yield_simple_division() {
        let input = SavingsGoalInput {
            goal_amount: 10_000.0,
            starting_balance: 1_000.0,
            monthly_contribution: 500.0,
            annual_yield_pct: 0.0,
        };
        let result = calculate(&input).unwrap();
        // (10000 - 1000) / 500 = 18 months exactly
        assert_eq!(result.months_to_goal, Some(18));
        assert_eq!(result.total_contributed, Some(9_000.0));
        assert_eq!(result.interest_earned, Some(0.0));
    }

    #[test]
    fn test_yield_shortens_timeline() {
        let no_yield = SavingsGoalInput {
            goal_amount: 50_000.0,
            starting_balance: 5_000.0,
            monthly_contribution: 600.0,
            annual_yield_pct: 0.0,
        };
        let with_yield = SavingsGoalInput {
            annual_yield_pct: 6.0,
            ..no_yield.clone()
        };
        let slow = calculate(&no_yield).unwrap().months_to_goal.unwrap();
        let fast = calculate(&with_yield).unwrap().months_to_goal.unwrap();
        assert!(fast < slow);
    }

    #[test]
    fn test_already_at_goal() {
        let input = SavingsGoalInput {
            goal_amount: 5_000.0,
            starting_balance: 6_000.0,
            monthly_contribution: 100.0,
            annual_yield_pct: 3.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.months_to_goal, Some(0));
        assert_eq!(result.projected_balance, Some(6_000.0));
    }

    #[test]
    fn test_unreachable_no_contribution_no_yield() {
        let input = SavingsGoalInput {
            goal_amount: 5_000.0,
            starting_balance: 1_000.0,
            monthly_contribution: 0.0,
            annual_yield_pct: 0.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.months_to_goal, None);
    }

    #[test]
    fn test_unreachable_zero_balance_zero_contribution() {
        let input = SavingsGoalInput {
            goal_amount: 5_000.0,
            starting_balance: 0.0,
            monthly_contribution: 0.0,
            annual_yield_pct: 5.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.months_to_goal, None);
    }

    #[test]
    fn test_growth_only_reaches_goal() {
        // No contributions, but yield compounds the balance up to the goal
        let input = SavingsGoalInput {
            goal_amount: 2_000.0,
            starting_balance: 1_000.0,
            monthly_contribution: 0.0,
            annual_yield_pct: 12.0,
        };
        let result = calculate(&input).unwrap();
        let months = result.months_to_goal.unwrap();
        // Doubling at 1%/month takes ~70 months
        assert!((60..=80).contains(&months));
        assert!(result.projected_balance.unwrap() >= 2_000.0);
    }

    #[test]
    fn test_century_cap_is_unreachable() {
        let input = SavingsGoalInput {
            goal_amount: 1_000_000_000.0,
            starting_balance: 10.0,
            monthly_contribution: 1.0,
            annual_yield_pct: 0.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.months_to_goal, None);
    }

    #[test]
    fn test_projected_balance_covers_goal() {
        let input = SavingsGoalInput {
            goal_amount: 20_000.0,
            starting_balance: 2_500.0,
            monthly_contribution: 400.0,
            annual_yield_pct: 4.0,
        };
        let result = calculate(&input).unwrap();
        assert!(result.projected_balance.unwrap() >= 20_000.0);
        assert!(result.interest_earned.unwrap() > 0.0);
    }
}
