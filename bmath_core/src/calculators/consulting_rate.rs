//! # Consulting Rate Calculator
//!
//! Works backward from a target annual income to the hourly rate a
//! freelancer or consultant must charge, accounting for non-billable time,
//! overhead, and a profit margin on top.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Billable hours per week are clamped into this range
const MIN_HOURS_PER_WEEK: f64 = 1.0;
const MAX_HOURS_PER_WEEK: f64 = 80.0;

/// Weeks off are clamped so at least one working week remains
const MAX_WEEKS_OFF: f64 = 51.0;

const MAX_MARGIN_PCT: f64 = 99.9;

/// Input parameters for the consulting rate calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "target_annual_income": 90000.0,
///   "billable_hours_per_week": 25.0,
///   "weeks_off_per_year": 6.0,
///   "annual_overhead": 8000.0,
///   "profit_margin_pct": 10.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultingRateInput {
    /// Income you want to take home before tax
    pub target_annual_income: f64,

    /// Hours per week you can actually bill (clamped into [1, 80])
    pub billable_hours_per_week: f64,

    /// Vacation, sick, and admin weeks per year (clamped into [0, 51])
    pub weeks_off_per_year: f64,

    /// Annual business overhead (software, insurance, equipment)
    pub annual_overhead: f64,

    /// Profit margin percent on top of income + overhead (clamped into [0, 99.9])
    pub profit_margin_pct: f64,
}

impl ConsultingRateInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.target_annual_income < 0.0 {
            return Err(CalcError::invalid_input(
                "target_annual_income",
                self.target_annual_income.to_string(),
                "Income cannot be negative",
            ));
        }
        if self.annual_overhead < 0.0 {
            return Err(CalcError::invalid_input(
                "annual_overhead",
                self.annual_overhead.to_string(),
                "Overhead cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Results from the consulting rate calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultingRateResult {
    /// Billable hours per year after the clamps
    pub annual_billable_hours: f64,

    /// Revenue the business must bring in
    pub required_annual_revenue: f64,

    /// Hourly rate to charge
    pub hourly_rate: f64,

    /// Day rate at 8 billable hours
    pub day_rate: f64,

    /// Required revenue spread over 12 months
    pub monthly_revenue: f64,
}

/// Calculate the required consulting rate.
pub fn calculate(input: &ConsultingRateInput) -> CalcResult<ConsultingRateResult> {
    input.validate()?;

    let hours_per_week = input
        .billable_hours_per_week
        .clamp(MIN_HOURS_PER_WEEK, MAX_HOURS_PER_WEEK);
    let weeks_off = input.weeks_off_per_year.clamp(0.0, MAX_WEEKS_OFF);
    let margin_pct = input.profit_margin_pct.clamp(0.0, MAX_MARGIN_PCT);

    let working_weeks = 52.0 - weeks_off;
    let annual_billable_hours = hours_per_week * working_weeks;

    let required_annual_revenue =
        (input.target_annual_income + input.annual_overhead) / (1.0 - margin_pct / 100.0);

    let hourly_rate = required_annual_revenue / annual_billable_hours;

    Ok(ConsultingRateResult {
        annual_billable_hours,
        required_annual_revenue,
        hourly_rate,
        day_rate: hourly_rate * 8.0,
        monthly_revenue: required_annual_revenue / 12.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> ConsultingRateInput {
        ConsultingRateInput {
            target_annual_income: 90_000.0,
            billable_hours_per_week: 25.0,
            weeks_off_per_year: 6.0,
            annual_overhead: 8_000.0,
            profit_margin_pct: 10.0,
        }
    }

    #[test]
    fn test_billable_hours() {
        let result = calculate(&test_input()).unwrap();
        // 25 h/wk * 46 wk = 1150 h
        assert_eq!(result.annual_billable_hours, 1150.0);
    }

    #[test]
    fn test_hourly_rate() {
        let result = calculate(&test_input()).unwrap();
        // revenue = 98000 / 0.9 = 108888.9; rate = revenue / 1150 ≈ 94.69
        assert!((result.required_annual_revenue - 108_888.89).abs() < 0.01);
        assert!((result.hourly_rate - 94.69).abs() < 0.01);
        assert!((result.day_rate - result.hourly_rate * 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_more_weeks_off_raises_rate() {
        let mut input = test_input();
        let base = calculate(&input).unwrap().hourly_rate;
        input.weeks_off_per_year = 12.0;
        let fewer_weeks = calculate(&input).unwrap().hourly_rate;
        assert!(fewer_weeks > base);
    }

    #[test]
    fn test_margin_raises_rate() {
        let mut input = test_input();
        input.profit_margin_pct = 0.0;
        let base = calculate(&input).unwrap().hourly_rate;
        input.profit_margin_pct = 25.0;
        let with_margin = calculate(&input).unwrap().hourly_rate;
        assert!(with_margin > base);
    }

    #[test]
    fn test_hours_clamped() {
        let mut input = test_input();
        input.billable_hours_per_week = 0.0;
        let result = calculate(&input).unwrap();
        // Clamped to 1 h/wk; rate is large but finite
        assert_eq!(result.annual_billable_hours, 46.0);
        assert!(result.hourly_rate.is_finite());

        input.billable_hours_per_week = 200.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.annual_billable_hours, 80.0 * 46.0);
    }

    #[test]
    fn test_weeks_off_clamped() {
        let mut input = test_input();
        input.weeks_off_per_year = 60.0;
        let result = calculate(&input).unwrap();
        // Clamped to 51 weeks off -> one working week left
        assert_eq!(result.annual_billable_hours, 25.0);
    }

    #[test]
    fn test_determinism() {
        let input = test_input();
        let a = calculate(&input).unwrap();
        let b = calculate(&input).unwrap();
        assert_eq!(a.hourly_rate, b.hourly_rate);
    }
}
