//! # Share Text Templates
//!
//! Plain-text summaries of calculator results, suitable for pasting into a
//! chat or a social post, with the calculator's URL appended. Only the
//! calculators people actually share have templates; the rest render through
//! the CLI/report layers.

use crate::calculators::{
    BatchCostResult, BreakEvenResult, CarbonationResult, PressureDropResult, TipSplitResult,
};
use crate::presets::CurrencyCode;
use crate::registry::Calculator;

/// Share text for a batch cost result.
pub fn batch_cost(result: &BatchCostResult, currency: CurrencyCode, site_base: &str) -> String {
    format!(
        "Batch of {} units costs {} ({} each). Suggested retail at {:.0}% margin: {}.\n{}",
        result.units_costed,
        currency.format_amount(result.total_batch_cost),
        currency.format_amount(result.cost_per_unit),
        result.margin_pct_applied,
        currency.format_amount(result.suggested_retail_price),
        Calculator::BatchCost.url(site_base),
    )
}

/// Share text for a break-even result.
pub fn break_even(result: &BreakEvenResult, currency: CurrencyCode, site_base: &str) -> String {
    let headline = match result.units_to_sell() {
        Some(units) => format!(
            "Break-even at {} units ({} revenue).",
            units,
            currency.format_amount(result.break_even_revenue.unwrap_or(0.0)),
        ),
        None => "No break-even point: each sale loses money.".to_string(),
    };
    format!("{}\n{}", headline, Calculator::BreakEven.url(site_base))
}

/// Share text for a tip split result.
pub fn tip_split(result: &TipSplitResult, currency: CurrencyCode, site_base: &str) -> String {
    format!(
        "Total with tip: {} — {} each for {} people.\n{}",
        currency.format_amount(result.total_with_tip),
        currency.format_amount(result.per_person),
        result.people_counted,
        Calculator::TipSplit.url(site_base),
    )
}

/// Share text for a pressure drop result.
pub fn pressure_drop(result: &PressureDropResult, site_base: &str) -> String {
    format!(
        "Pressure drop: {:.2} kPa ({:.2} psi) at {:.2} m/s, f = {:.4} (Re {:.0}).\n{}",
        result.pressure_drop_kpa,
        result.pressure_drop_psi,
        result.velocity_m_s,
        result.friction_factor,
        result.reynolds,
        Calculator::PressureDrop.url(site_base),
    )
}

/// Share text for a carbonation result.
pub fn carbonation(result: &CarbonationResult, site_base: &str) -> String {
    format!(
        "Set the regulator to {:.1} psi for {:.1} volumes of CO2 at {:.0} °F.\n{}",
        result.required_gauge_psi,
        result.target_volumes,
        result.temperature_f_used,
        Calculator::Carbonation.url(site_base),
    )
}
