//! # Carbonation Pressure Calculator
//!
//! Regulator pressure needed to force-carbonate a beverage to a target CO2
//! level at a given temperature.
//!
//! CO2 solubility falls as temperature rises. Solubility is read from a
//! small static table of volumes dissolved per atmosphere (absolute) and
//! interpolated piecewise-linearly between rows; dissolved CO2 then scales
//! linearly with absolute pressure (Henry's law), which inverts directly to
//! the required gauge pressure.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Celsius, Fahrenheit, KPA_PER_PSI};

/// Atmospheric pressure in psi
const ATM_PSI: f64 = 14.695;

/// Target CO2 volumes above this are clamped (nothing drinkable goes higher)
const MAX_CO2_VOLUMES: f64 = 5.0;

/// CO2 solubility in volumes per atmosphere absolute, by temperature (°F).
///
/// Rows must stay sorted by temperature. Temperatures outside the table
/// clamp to the first/last row.
const SOLUBILITY_TABLE: &[(f64, f64)] = &[
    (32.0, 1.713),
    (41.0, 1.424),
    (50.0, 1.194),
    (59.0, 1.019),
    (68.0, 0.878),
    (77.0, 0.759),
    (86.0, 0.665),
];

/// Temperature unit for the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TempUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

/// Input parameters for the carbonation calculation.
///
/// ## JSON Example
///
/// ```json
/// { "temperature": 38.0, "temp_unit": "Fahrenheit", "target_co2_volumes": 2.4 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonationInput {
    /// Beverage temperature in the unit given by `temp_unit`
    pub temperature: f64,

    /// Unit of `temperature`
    pub temp_unit: TempUnit,

    /// Target dissolved CO2 in volumes (clamped into [0, 5])
    pub target_co2_volumes: f64,
}

impl CarbonationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.target_co2_volumes < 0.0 {
            return Err(CalcError::invalid_input(
                "target_co2_volumes",
                self.target_co2_volumes.to_string(),
                "CO2 volumes cannot be negative",
            ));
        }
        if !self.temperature.is_finite() {
            return Err(CalcError::invalid_input(
                "temperature",
                self.temperature.to_string(),
                "Temperature must be a finite number",
            ));
        }
        Ok(())
    }

    /// Temperature normalized to °F
    pub fn temperature_f(&self) -> f64 {
        match self.temp_unit {
            TempUnit::Fahrenheit => self.temperature,
            TempUnit::Celsius => Fahrenheit::from(Celsius(self.temperature)).value(),
        }
    }
}

/// Results from the carbonation calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonationResult {
    /// Temperature used, in °F, after clamping to the table range
    pub temperature_f_used: f64,

    /// Interpolated solubility at that temperature (volumes per atm absolute)
    pub solubility_vol_per_atm: f64,

    /// Target CO2 volumes after clamping
    pub target_volumes: f64,

    /// Required regulator gauge pressure (psi, clamped to >= 0)
    pub required_gauge_psi: f64,

    /// Required regulator gauge pressure (kPa)
    pub required_gauge_kpa: f64,

    /// CO2 the beverage holds at atmospheric pressure (volumes)
    pub volumes_at_atmospheric: f64,
}

/// Piecewise-linear interpolation over the solubility table, clamped at the
/// ends.
fn solubility_at(temp_f: f64) -> f64 {
    let first = SOLUBILITY_TABLE[0];
    let last = SOLUBILITY_TABLE[SOLUBILITY_TABLE.len() - 1];
    if temp_f <= first.0 {
        return first.1;
    }
    if temp_f >= last.0 {
        return last.1;
    }
    for window in SOLUBILITY_TABLE.windows(2) {
        let (t0, s0) = window[0];
        let (t1, s1) = window[1];
        if temp_f >= t0 && temp_f <= t1 {
            let frac = (temp_f - t0) / (t1 - t0);
            return s0 + frac * (s1 - s0);
        }
    }
    // Sorted table covers (first, last); the loop always returns before here
    last.1
}

/// Calculate the required carbonation pressure.
pub fn calculate(input: &CarbonationInput) -> CalcResult<CarbonationResult> {
    input.validate()?;

    let table_min = SOLUBILITY_TABLE[0].0;
    let table_max = SOLUBILITY_TABLE[SOLUBILITY_TABLE.len() - 1].0;
    let temperature_f_used = input.temperature_f().clamp(table_min, table_max);
    let target_volumes = input.target_co2_volumes.min(MAX_CO2_VOLUMES);

    let solubility = solubility_at(temperature_f_used);

    // Henry's law: volumes = s(T) · P_abs[atm]. Invert for P and convert
    // to gauge; already-saturated beverages clamp to zero.
    let required_abs_atm = target_volumes / solubility;
    let required_gauge_psi = ((required_abs_atm - 1.0) * ATM_PSI).max(0.0);

    Ok(CarbonationResult {
        temperature_f_used,
        solubility_vol_per_atm: solubility,
        target_volumes,
        required_gauge_psi,
        required_gauge_kpa: required_gauge_psi * KPA_PER_PSI,
        volumes_at_atmospheric: solubility,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_row_exact() {
        // On a table row, no interpolation error
        assert_eq!(solubility_at(50.0), 1.194);
    }

    #[test]
    fn test_interpolation_between_rows() {
        // Midpoint of (41, 1.424) and (50, 1.194)
        let s = solubility_at(45.5);
        assert!((s - 1.309).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_outside_table() {
        assert_eq!(solubility_at(0.0), 1.713);
        assert_eq!(solubility_at(120.0), 0.665);
    }

    #[test]
    fn test_typical_keg_pressure() {
        // Ale at 40 °F carbonated to 2.5 volumes needs roughly 10-12 psi
        let input = CarbonationInput {
            temperature: 40.0,
            temp_unit: TempUnit::Fahrenheit,
            target_co2_volumes: 2.5,
        };
        let result = calculate(&input).unwrap();
        assert!(
            result.required_gauge_psi > 8.0 && result.required_gauge_psi < 14.0,
            "got {} psi",
            result.required_gauge_psi
        );
    }

    #[test]
    fn test_warmer_needs_more_pressure() {
        let mut last = 0.0;
        for temp in [38.0, 48.0, 58.0, 68.0] {
            let input = CarbonationInput {
                temperature: temp,
                temp_unit: TempUnit::Fahrenheit,
                target_co2_volumes: 2.4,
            };
            let psi = calculate(&input).unwrap().required_gauge_psi;
            assert!(psi > last, "at {} °F got {} psi", temp, psi);
            last = psi;
        }
    }

    #[test]
    fn test_celsius_input() {
        let f_input = CarbonationInput {
            temperature: 40.0,
            temp_unit: TempUnit::Fahrenheit,
            target_co2_volumes: 2.4,
        };
        let c_input = CarbonationInput {
            temperature: (40.0 - 32.0) * 5.0 / 9.0,
            temp_unit: TempUnit::Celsius,
            target_co2_volumes: 2.4,
        };
        let f_psi = calculate(&f_input).unwrap().required_gauge_psi;
        let c_psi = calculate(&c_input).unwrap().required_gauge_psi;
        assert!((f_psi - c_psi).abs() < 1e-9);
    }

    #[test]
    fn test_low_target_clamps_to_zero_gauge() {
        // Cold water already holds 1 volume at atmospheric pressure
        let input = CarbonationInput {
            temperature: 32.0,
            temp_unit: TempUnit::Fahrenheit,
            target_co2_volumes: 1.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.required_gauge_psi, 0.0);
    }

    #[test]
    fn test_extreme_target_clamped() {
        let input = CarbonationInput {
            temperature: 40.0,
            temp_unit: TempUnit::Fahrenheit,
            target_co2_volumes: 25.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.target_volumes, 5.0);
        assert!(result.required_gauge_psi.is_finite());
    }

    #[test]
    fn test_negative_volumes_rejected() {
        let input = CarbonationInput {
            temperature: 40.0,
            temp_unit: TempUnit::Fahrenheit,
            target_co2_volumes: -1.0,
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_kpa_conversion() {
        let input = CarbonationInput {
            temperature: 40.0,
            temp_unit: TempUnit::Fahrenheit,
            target_co2_volumes: 2.5,
        };
        let result = calculate(&input).unwrap();
        assert!(
            (result.required_gauge_kpa - result.required_gauge_psi * 6.894757).abs() < 1e-9
        );
    }
}
