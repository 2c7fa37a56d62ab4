//! # Loan Payment Calculator
//!
//! Standard amortized loan payment from principal, annual rate, and term.
//! The zero-rate case is special-cased so the annuity formula never divides
//! by zero.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input parameters for the loan payment calculation.
///
/// ## JSON Example
///
/// ```json
/// { "principal": 250000.0, "annual_rate_pct": 5.5, "term_months": 360 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPaymentInput {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate in percent (APR, nominal)
    pub annual_rate_pct: f64,

    /// Term in months (clamped to at least 1)
    pub term_months: u32,
}

impl LoanPaymentInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.principal < 0.0 {
            return Err(CalcError::invalid_input(
                "principal",
                self.principal.to_string(),
                "Principal cannot be negative",
            ));
        }
        if self.annual_rate_pct < 0.0 {
            return Err(CalcError::invalid_input(
                "annual_rate_pct",
                self.annual_rate_pct.to_string(),
                "Rate cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Results from the loan payment calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPaymentResult {
    /// Monthly payment
    pub monthly_payment: f64,

    /// Total paid over the full term
    pub total_paid: f64,

    /// Total interest paid over the full term
    pub total_interest: f64,

    /// Term used after the minimum-1 clamp
    pub months: u32,
}

/// Calculate the amortized monthly payment.
///
/// Uses the annuity formula `P·r / (1 - (1+r)^-n)` with monthly rate `r`;
/// a zero rate degrades to simple division.
pub fn calculate(input: &LoanPaymentInput) -> CalcResult<LoanPaymentResult> {
    input.validate()?;

    let months = input.term_months.max(1);
    let n = months as f64;
    let r = input.annual_rate_pct / 100.0 / 12.0;

    let monthly_payment = if r == 0.0 {
        input.principal / n
    } else {
        input.principal * r / (1.0 - (1.0 + r).powf(-n))
    };

    let total_paid = monthly_payment * n;

    Ok(LoanPaymentResult {
        monthly_payment,
        total_paid,
        total_interest: total_paid - input.principal,
        months,
    })
}
