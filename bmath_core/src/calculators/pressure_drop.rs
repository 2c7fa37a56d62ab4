//! # Pressure Drop Calculator
//!
//! Darcy-Weisbach pressure drop for a straight circular pipe running full:
//!
//! ```text
//! Δp = f · (L/D) · ρ·v²/2
//! ```
//!
//! The friction factor `f` uses the laminar closed form `64/Re` below
//! Re 2300 and the Colebrook-White equation above it, solved by fixed-point
//! iteration on `1/√f` seeded with the Swamee-Jain explicit approximation.
//!
//! ## References
//!
//! - Colebrook, C.F. (1939), "Turbulent flow in pipes"
//! - Swamee, P.K. & Jain, A.K. (1976), explicit friction factor
//!
//! ## Example
//!
//! ```rust
//! use bmath_core::calculators::pressure_drop::{
//!     calculate, PressureDropInput, RoughnessSpec,
//! };
//! use bmath_core::presets::{Fluid, PipeMaterial};
//!
//! let input = PressureDropInput {
//!     diameter_mm: 50.0,
//!     length_m: 25.0,
//!     flow_l_per_min: 120.0,
//!     roughness: RoughnessSpec::Material {
//!         material: PipeMaterial::CommercialSteel,
//!     },
//!     fluid: Fluid::Water,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.pressure_drop_kpa > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculators::pipe_flow::RE_LAMINAR_LIMIT;
use crate::errors::{CalcError, CalcResult};
use crate::presets::{Fluid, PipeMaterial};
use crate::units::KPA_PER_PSI;

/// Maximum iterations for the Colebrook-White fixed point
const MAX_ITERATIONS: usize = 50;

/// Convergence tolerance on 1/√f
const TOLERANCE: f64 = 1e-8;

/// Standard gravity (m/s²)
const G_MPS2: f64 = 9.80665;

/// Pipe roughness source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RoughnessSpec {
    /// Use a pipe material preset
    Material { material: PipeMaterial },
    /// Supply an explicit absolute roughness in millimeters
    Custom { roughness_mm: f64 },
}

impl RoughnessSpec {
    /// Absolute roughness in millimeters
    pub fn roughness_mm(&self) -> f64 {
        match self {
            RoughnessSpec::Material { material } => material.roughness_mm(),
            RoughnessSpec::Custom { roughness_mm } => *roughness_mm,
        }
    }
}

/// Input parameters for the pressure drop calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "diameter_mm": 50.0,
///   "length_m": 25.0,
///   "flow_l_per_min": 120.0,
///   "roughness": { "type": "Material", "material": "CommercialSteel" },
///   "fluid": "Water"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PressureDropInput {
    /// Inside diameter in millimeters
    pub diameter_mm: f64,

    /// Straight pipe length in meters
    pub length_m: f64,

    /// Volumetric flow in liters per minute
    pub flow_l_per_min: f64,

    /// Roughness source (material preset or explicit value)
    pub roughness: RoughnessSpec,

    /// Working fluid (density/viscosity preset)
    pub fluid: Fluid,
}

impl PressureDropInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.diameter_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "diameter_mm",
                self.diameter_mm.to_string(),
                "Diameter must be positive",
            ));
        }
        if self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Length must be positive",
            ));
        }
        if self.flow_l_per_min < 0.0 {
            return Err(CalcError::invalid_input(
                "flow_l_per_min",
                self.flow_l_per_min.to_string(),
                "Flow cannot be negative",
            ));
        }
        if self.roughness.roughness_mm() < 0.0 {
            return Err(CalcError::invalid_input(
                "roughness",
                self.roughness.roughness_mm().to_string(),
                "Roughness cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Results from the pressure drop calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PressureDropResult {
    /// Mean velocity (m/s)
    pub velocity_m_s: f64,

    /// Reynolds number
    pub reynolds: f64,

    /// Darcy friction factor
    pub friction_factor: f64,

    /// Iterations the Colebrook solve used (0 for laminar or zero flow)
    pub iterations: u32,

    /// Pressure drop (kPa)
    pub pressure_drop_kpa: f64,

    /// Pressure drop (psi)
    pub pressure_drop_psi: f64,

    /// Head loss (m of fluid column)
    pub head_loss_m: f64,

    /// Roughness actually used (mm)
    pub roughness_mm_used: f64,
}

/// Solve the Colebrook-White equation for the Darcy friction factor.
///
/// Iterates `x = -2·log10(ε/(3.7·D) + 2.51·x/Re)` where `x = 1/√f`, seeded
/// with the Swamee-Jain explicit approximation. Converges in well under ten
/// iterations for any physical pipe; the cap is a safety net, not a target.
///
/// Returns `(friction_factor, iterations)`.
fn colebrook_friction_factor(relative_roughness: f64, reynolds: f64) -> (f64, u32) {
    // Swamee-Jain seed
    let seed_f = 0.25
        / (relative_roughness / 3.7 + 5.74 / reynolds.powf(0.9))
            .log10()
            .powi(2);
    let mut x = 1.0 / seed_f.sqrt();

    let mut iterations = 0u32;
    for _ in 0..MAX_ITERATIONS {
        let x_next = -2.0 * (relative_roughness / 3.7 + 2.51 * x / reynolds).log10();
        iterations += 1;
        if (x_next - x).abs() < TOLERANCE {
            x = x_next;
            break;
        }
        x = x_next;
    }

    (1.0 / (x * x), iterations)
}

/// Calculate the Darcy-Weisbach pressure drop.
pub fn calculate(input: &PressureDropInput) -> CalcResult<PressureDropResult> {
    input.validate()?;

    let roughness_mm = input.roughness.roughness_mm();

    // Zero flow short-circuits: no velocity, no loss, no iteration
    if input.flow_l_per_min == 0.0 {
        return Ok(PressureDropResult {
            velocity_m_s: 0.0,
            reynolds: 0.0,
            friction_factor: 0.0,
            iterations: 0,
            pressure_drop_kpa: 0.0,
            pressure_drop_psi: 0.0,
            head_loss_m: 0.0,
            roughness_mm_used: roughness_mm,
        });
    }

    let d_m = input.diameter_mm / 1000.0;
    let area_m2 = std::f64::consts::FRAC_PI_4 * d_m * d_m;
    let flow_m3_s = input.flow_l_per_min / 1000.0 / 60.0;
    let velocity_m_s = flow_m3_s / area_m2;

    let props = input.fluid.properties();
    let reynolds = props.density_kg_m3 * velocity_m_s * d_m / props.viscosity_pa_s;

    let (friction_factor, iterations) = if reynolds < RE_LAMINAR_LIMIT {
        (64.0 / reynolds, 0)
    } else {
        colebrook_friction_factor(roughness_mm / input.diameter_mm, reynolds)
    };

    let dp_pa = friction_factor * (input.length_m / d_m) * props.density_kg_m3
        * velocity_m_s
        * velocity_m_s
        / 2.0;
    let pressure_drop_kpa = dp_pa / 1000.0;

    Ok(PressureDropResult {
        velocity_m_s,
        reynolds,
        friction_factor,
        iterations,
        pressure_drop_kpa,
        pressure_drop_psi: pressure_drop_kpa / KPA_PER_PSI,
        head_loss_m: dp_pa / (props.density_kg_m3 * G_MPS2),
        roughness_mm_used: roughness_mm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steel_pipe() -> PressureDropInput {
        PressureDropInput {
            diameter_mm: 50.0,
            length_m: 25.0,
            flow_l_per_min: 120.0,
            roughness: RoughnessSpec::Material {
                material: PipeMaterial::CommercialSteel,
            },
            fluid: Fluid::Water,
        }
    }

    /// The converged factor must satisfy the Colebrook equation itself
    fn colebrook_residual(f: f64, rel_rough: f64, re: f64) -> f64 {
        let lhs = 1.0 / f.sqrt();
        let rhs = -2.0 * (rel_rough / 3.7 + 2.51 / (re * f.sqrt())).log10();
        (lhs - rhs).abs()
    }

    #[test]
    fn test_turbulent_solution_satisfies_colebrook() {
        let input = steel_pipe();
        let result = calculate(&input).unwrap();
        assert!(result.reynolds > RE_LAMINAR_LIMIT);

        let rel_rough = 0.045 / 50.0;
        let residual = colebrook_residual(result.friction_factor, rel_rough, result.reynolds);
        assert!(residual < 1e-6, "residual {}", residual);
    }

    #[test]
    fn test_turbulent_friction_factor_range() {
        let result = calculate(&steel_pipe()).unwrap();
        // Moody chart territory for this Re and roughness
        assert!(result.friction_factor > 0.015 && result.friction_factor < 0.05);
        assert!(result.iterations >= 1);
        assert!(result.iterations <= 50);
    }

    #[test]
    fn test_laminar_closed_form() {
        // Light oil at a trickle stays laminar
        let input = PressureDropInput {
            diameter_mm: 25.0,
            length_m: 10.0,
            flow_l_per_min: 5.0,
            roughness: RoughnessSpec::Material {
                material: PipeMaterial::Copper,
            },
            fluid: Fluid::LightOil,
        };
        let result = calculate(&input).unwrap();
        assert!(result.reynolds < RE_LAMINAR_LIMIT);
        assert!((result.friction_factor - 64.0 / result.reynolds).abs() < 1e-12);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_zero_flow_all_zeros() {
        let mut input = steel_pipe();
        input.flow_l_per_min = 0.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.velocity_m_s, 0.0);
        assert_eq!(result.pressure_drop_kpa, 0.0);
        assert_eq!(result.head_loss_m, 0.0);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_pressure_drop_proportional_to_length() {
        let short = calculate(&steel_pipe()).unwrap();
        let mut long_input = steel_pipe();
        long_input.length_m = 50.0;
        let long = calculate(&long_input).unwrap();
        assert!((long.pressure_drop_kpa / short.pressure_drop_kpa - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_rougher_pipe_drops_more() {
        let smooth = PressureDropInput {
            roughness: RoughnessSpec::Material {
                material: PipeMaterial::Pvc,
            },
            ..steel_pipe()
        };
        let rough = PressureDropInput {
            roughness: RoughnessSpec::Material {
                material: PipeMaterial::CastIron,
            },
            ..steel_pipe()
        };
        let dp_smooth = calculate(&smooth).unwrap().pressure_drop_kpa;
        let dp_rough = calculate(&rough).unwrap().pressure_drop_kpa;
        assert!(dp_rough > dp_smooth);
    }

    #[test]
    fn test_custom_roughness() {
        let input = PressureDropInput {
            roughness: RoughnessSpec::Custom { roughness_mm: 0.3 },
            ..steel_pipe()
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.roughness_mm_used, 0.3);
    }

    #[test]
    fn test_head_loss_consistent_with_pressure() {
        let result = calculate(&steel_pipe()).unwrap();
        // Δp = ρ·g·h
        let props = Fluid::Water.properties();
        let dp_from_head = props.density_kg_m3 * G_MPS2 * result.head_loss_m / 1000.0;
        assert!((dp_from_head - result.pressure_drop_kpa).abs() < 1e-9);
    }

    #[test]
    fn test_psi_conversion() {
        let result = calculate(&steel_pipe()).unwrap();
        assert!(
            (result.pressure_drop_psi - result.pressure_drop_kpa / 6.894757).abs() < 1e-9
        );
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = steel_pipe();
        input.diameter_mm = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = steel_pipe();
        input.length_m = -1.0;
        assert!(calculate(&input).is_err());

        let mut input = steel_pipe();
        input.roughness = RoughnessSpec::Custom { roughness_mm: -0.1 };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_determinism() {
        let input = steel_pipe();
        let a = calculate(&input).unwrap();
        let b = calculate(&input).unwrap();
        assert_eq!(a.friction_factor, b.friction_factor);
        assert_eq!(a.pressure_drop_kpa, b.pressure_drop_kpa);
        assert_eq!(a.iterations, b.iterations);
    }
}
