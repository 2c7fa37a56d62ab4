//! Fluid Presets
//!
//! Density and dynamic viscosity for the working fluids the flow calculators
//! support. Values are handbook figures at the stated temperature.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Working fluids for the flow calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Fluid {
    /// Water at 10 °C (cold supply)
    WaterCold,
    /// Water at 20 °C
    #[default]
    Water,
    /// Water at 60 °C (hot supply)
    WaterHot,
    /// Seawater at 20 °C
    Seawater,
    /// 30% propylene glycol at 20 °C (chiller loops)
    PropyleneGlycol30,
    /// Light hydraulic oil at 40 °C
    LightOil,
}

/// Fluid properties used by the flow calculators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidProperties {
    /// Fluid
    pub fluid: Fluid,
    /// Density (kg/m³)
    pub density_kg_m3: f64,
    /// Dynamic viscosity (Pa·s)
    pub viscosity_pa_s: f64,
}

impl Fluid {
    /// All fluids for UI selection
    pub const ALL: [Fluid; 6] = [
        Fluid::WaterCold,
        Fluid::Water,
        Fluid::WaterHot,
        Fluid::Seawater,
        Fluid::PropyleneGlycol30,
        Fluid::LightOil,
    ];

    /// Look up fluid properties
    pub fn properties(&self) -> FluidProperties {
        let (density_kg_m3, viscosity_pa_s) = match self {
            Fluid::WaterCold => (999.7, 1.307e-3),
            Fluid::Water => (998.2, 1.002e-3),
            Fluid::WaterHot => (983.2, 0.467e-3),
            Fluid::Seawater => (1025.0, 1.08e-3),
            Fluid::PropyleneGlycol30 => (1026.0, 2.4e-3),
            Fluid::LightOil => (860.0, 0.028),
        };
        FluidProperties {
            fluid: *self,
            density_kg_m3,
            viscosity_pa_s,
        }
    }

    /// Get the short code string (e.g., "WATER", "SEAWATER")
    pub fn code(&self) -> &'static str {
        match self {
            Fluid::WaterCold => "WATER-10C",
            Fluid::Water => "WATER",
            Fluid::WaterHot => "WATER-60C",
            Fluid::Seawater => "SEAWATER",
            Fluid::PropyleneGlycol30 => "PG-30",
            Fluid::LightOil => "OIL",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "WATER-10C" | "COLD-WATER" | "WATER-COLD" => Ok(Fluid::WaterCold),
            "WATER" | "WATER-20C" => Ok(Fluid::Water),
            "WATER-60C" | "HOT-WATER" | "WATER-HOT" => Ok(Fluid::WaterHot),
            "SEAWATER" | "SALT-WATER" => Ok(Fluid::Seawater),
            "PG-30" | "GLYCOL" | "PROPYLENE-GLYCOL" => Ok(Fluid::PropyleneGlycol30),
            "OIL" | "LIGHT-OIL" | "HYDRAULIC-OIL" => Ok(Fluid::LightOil),
            _ => Err(CalcError::preset_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Fluid::WaterCold => "Water (10 °C)",
            Fluid::Water => "Water (20 °C)",
            Fluid::WaterHot => "Water (60 °C)",
            Fluid::Seawater => "Seawater",
            Fluid::PropyleneGlycol30 => "Propylene Glycol 30%",
            Fluid::LightOil => "Light Oil",
        }
    }

    /// Kinematic viscosity ν = μ/ρ (m²/s)
    pub fn kinematic_viscosity_m2_s(&self) -> f64 {
        let props = self.properties();
        props.viscosity_pa_s / props.density_kg_m3
    }
}

impl std::fmt::Display for Fluid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_properties() {
        let props = Fluid::Water.properties();
        assert_eq!(props.density_kg_m3, 998.2);
        assert_eq!(props.viscosity_pa_s, 1.002e-3);
    }

    #[test]
    fn test_viscosity_falls_with_temperature() {
        assert!(
            Fluid::WaterCold.properties().viscosity_pa_s
                > Fluid::Water.properties().viscosity_pa_s
        );
        assert!(
            Fluid::Water.properties().viscosity_pa_s
                > Fluid::WaterHot.properties().viscosity_pa_s
        );
    }

    #[test]
    fn test_kinematic_viscosity() {
        // Water at 20 °C: ν ≈ 1.004e-6 m²/s
        let nu = Fluid::Water.kinematic_viscosity_m2_s();
        assert!((nu - 1.004e-6).abs() < 0.01e-6);
    }

    #[test]
    fn test_parsing() {
        assert_eq!(Fluid::from_str_flexible("water").unwrap(), Fluid::Water);
        assert_eq!(Fluid::from_str_flexible("glycol").unwrap(), Fluid::PropyleneGlycol30);
        assert!(Fluid::from_str_flexible("mercury").is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(Fluid::default(), Fluid::Water);
    }
}
