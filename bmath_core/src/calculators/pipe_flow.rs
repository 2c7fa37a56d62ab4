//! # Pipe Flow Calculator
//!
//! Converts between flow velocity and volumetric flow for a circular pipe
//! running full, and reports the Reynolds number and flow regime for the
//! selected fluid.
//!
//! Continuity: `Q = v · A` with `A = π/4 · D²`.
//! Reynolds number: `Re = ρ · v · D / μ`.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::presets::Fluid;

/// Laminar/transitional boundary for pipe flow
pub const RE_LAMINAR_LIMIT: f64 = 2300.0;

/// Transitional/turbulent boundary for pipe flow
pub const RE_TURBULENT_LIMIT: f64 = 4000.0;

/// Which quantity the input supplies; the other is computed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FlowSpec {
    /// Mean velocity in m/s
    Velocity { m_per_s: f64 },
    /// Volumetric flow in L/min
    VolumetricFlow { l_per_min: f64 },
}

/// Flow regime classification from the Reynolds number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRegime {
    /// Re < 2300
    Laminar,
    /// 2300 <= Re < 4000
    Transitional,
    /// Re >= 4000
    Turbulent,
}

impl FlowRegime {
    /// Classify a Reynolds number
    pub fn from_reynolds(re: f64) -> Self {
        if re < RE_LAMINAR_LIMIT {
            FlowRegime::Laminar
        } else if re < RE_TURBULENT_LIMIT {
            FlowRegime::Transitional
        } else {
            FlowRegime::Turbulent
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FlowRegime::Laminar => "Laminar",
            FlowRegime::Transitional => "Transitional",
            FlowRegime::Turbulent => "Turbulent",
        }
    }
}

impl std::fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input parameters for the pipe flow conversion.
///
/// ## JSON Example
///
/// ```json
/// {
///   "diameter_mm": 50.0,
///   "spec": { "type": "VolumetricFlow", "l_per_min": 120.0 },
///   "fluid": "Water"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeFlowInput {
    /// Inside diameter in millimeters
    pub diameter_mm: f64,

    /// Velocity or volumetric flow; the other is computed
    pub spec: FlowSpec,

    /// Working fluid (density/viscosity preset)
    pub fluid: Fluid,
}

impl PipeFlowInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.diameter_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "diameter_mm",
                self.diameter_mm.to_string(),
                "Diameter must be positive",
            ));
        }
        let supplied = match self.spec {
            FlowSpec::Velocity { m_per_s } => m_per_s,
            FlowSpec::VolumetricFlow { l_per_min } => l_per_min,
        };
        if supplied < 0.0 {
            return Err(CalcError::invalid_input(
                "spec",
                supplied.to_string(),
                "Flow and velocity cannot be negative",
            ));
        }
        Ok(())
    }

    /// Flow area in m²
    pub fn area_m2(&self) -> f64 {
        let d_m = self.diameter_mm / 1000.0;
        std::f64::consts::FRAC_PI_4 * d_m * d_m
    }
}

/// Results from the pipe flow conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeFlowResult {
    /// Mean velocity (m/s)
    pub velocity_m_s: f64,

    /// Volumetric flow (L/min)
    pub flow_l_min: f64,

    /// Volumetric flow (m³/h)
    pub flow_m3_h: f64,

    /// Volumetric flow (US gal/min)
    pub flow_gal_min: f64,

    /// Reynolds number
    pub reynolds: f64,

    /// Flow regime at that Reynolds number
    pub regime: FlowRegime,
}

/// Convert between velocity and volumetric flow and classify the regime.
pub fn calculate(input: &PipeFlowInput) -> CalcResult<PipeFlowResult> {
    input.validate()?;

    let area_m2 = input.area_m2();
    let d_m = input.diameter_mm / 1000.0;

    let (velocity_m_s, flow_m3_s) = match input.spec {
        FlowSpec::Velocity { m_per_s } => (m_per_s, m_per_s * area_m2),
        FlowSpec::VolumetricFlow { l_per_min } => {
            let q = l_per_min / 1000.0 / 60.0;
            (q / area_m2, q)
        }
    };

    let props = input.fluid.properties();
    let reynolds = props.density_kg_m3 * velocity_m_s * d_m / props.viscosity_pa_s;

    Ok(PipeFlowResult {
        velocity_m_s,
        flow_l_min: flow_m3_s * 1000.0 * 60.0,
        flow_m3_h: flow_m3_s * 3600.0,
        flow_gal_min: flow_m3_s * 1000.0 * 60.0 / 3.785411784,
        reynolds,
        regime: FlowRegime::from_reynolds(reynolds),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuity_roundtrip() {
        // Specifying the computed flow back as input recovers the velocity
        let by_velocity = PipeFlowInput {
            diameter_mm: 50.0,
            spec: FlowSpec::Velocity { m_per_s: 1.5 },
            fluid: Fluid::Water,
        };
        let r1 = calculate(&by_velocity).unwrap();

        let by_flow = PipeFlowInput {
            diameter_mm: 50.0,
            spec: FlowSpec::VolumetricFlow {
                l_per_min: r1.flow_l_min,
            },
            fluid: Fluid::Water,
        };
        let r2 = calculate(&by_flow).unwrap();
        assert!((r2.velocity_m_s - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_known_flow() {
        // 50 mm pipe at 1.5 m/s: A = 1.9635e-3 m², Q = 2.945e-3 m³/s ≈ 176.7 L/min
        let input = PipeFlowInput {
            diameter_mm: 50.0,
            spec: FlowSpec::Velocity { m_per_s: 1.5 },
            fluid: Fluid::Water,
        };
        let result = calculate(&input).unwrap();
        assert!((result.flow_l_min - 176.7).abs() < 0.1);
        assert!((result.flow_m3_h - 10.6).abs() < 0.05);
    }

    #[test]
    fn test_reynolds_water() {
        // Re = 998.2 * 1.5 * 0.05 / 1.002e-3 ≈ 74716
        let input = PipeFlowInput {
            diameter_mm: 50.0,
            spec: FlowSpec::Velocity { m_per_s: 1.5 },
            fluid: Fluid::Water,
        };
        let result = calculate(&input).unwrap();
        assert!((result.reynolds - 74_716.0).abs() < 50.0);
        assert_eq!(result.regime, FlowRegime::Turbulent);
    }

    #[test]
    fn test_regime_boundaries() {
        assert_eq!(FlowRegime::from_reynolds(0.0), FlowRegime::Laminar);
        assert_eq!(FlowRegime::from_reynolds(2299.9), FlowRegime::Laminar);
        assert_eq!(FlowRegime::from_reynolds(2300.0), FlowRegime::Transitional);
        assert_eq!(FlowRegime::from_reynolds(3999.9), FlowRegime::Transitional);
        assert_eq!(FlowRegime::from_reynolds(4000.0), FlowRegime::Turbulent);
    }

    #[test]
    fn test_zero_flow() {
        let input = PipeFlowInput {
            diameter_mm: 25.0,
            spec: FlowSpec::VolumetricFlow { l_per_min: 0.0 },
            fluid: Fluid::Water,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.velocity_m_s, 0.0);
        assert_eq!(result.reynolds, 0.0);
        assert_eq!(result.regime, FlowRegime::Laminar);
    }

    #[test]
    fn test_zero_diameter_rejected() {
        let input = PipeFlowInput {
            diameter_mm: 0.0,
            spec: FlowSpec::Velocity { m_per_s: 1.0 },
            fluid: Fluid::Water,
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_viscous_fluid_lowers_reynolds() {
        let water = PipeFlowInput {
            diameter_mm: 50.0,
            spec: FlowSpec::Velocity { m_per_s: 1.0 },
            fluid: Fluid::Water,
        };
        let oil = PipeFlowInput {
            fluid: Fluid::LightOil,
            ..water.clone()
        };
        let re_water = calculate(&water).unwrap().reynolds;
        let re_oil = calculate(&oil).unwrap().reynolds;
        assert!(re_oil < re_water);
    }
}
