//! Pipe Material Presets
//!
//! Absolute roughness values for common pipe materials, used to seed the
//! pressure-drop calculator. Values are the conventional design figures for
//! new pipe (Moody chart companion tables).

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Pipe materials with standard absolute roughness values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipeMaterial {
    /// PVC / plastic (smooth)
    #[serde(rename = "PVC")]
    Pvc,
    /// Drawn copper tubing
    Copper,
    /// Stainless steel
    Stainless,
    /// Commercial steel / wrought iron
    CommercialSteel,
    /// Galvanized steel
    GalvanizedSteel,
    /// Cast iron
    CastIron,
    /// Concrete (average finish)
    Concrete,
}

impl PipeMaterial {
    /// All pipe materials for UI selection
    pub const ALL: [PipeMaterial; 7] = [
        PipeMaterial::Pvc,
        PipeMaterial::Copper,
        PipeMaterial::Stainless,
        PipeMaterial::CommercialSteel,
        PipeMaterial::GalvanizedSteel,
        PipeMaterial::CastIron,
        PipeMaterial::Concrete,
    ];

    /// Absolute roughness in millimeters
    pub fn roughness_mm(&self) -> f64 {
        match self {
            PipeMaterial::Pvc => 0.0015,
            PipeMaterial::Copper => 0.0015,
            PipeMaterial::Stainless => 0.015,
            PipeMaterial::CommercialSteel => 0.045,
            PipeMaterial::GalvanizedSteel => 0.15,
            PipeMaterial::CastIron => 0.26,
            PipeMaterial::Concrete => 1.0,
        }
    }

    /// Get the short code string (e.g., "PVC", "STEEL")
    pub fn code(&self) -> &'static str {
        match self {
            PipeMaterial::Pvc => "PVC",
            PipeMaterial::Copper => "CU",
            PipeMaterial::Stainless => "SS",
            PipeMaterial::CommercialSteel => "STEEL",
            PipeMaterial::GalvanizedSteel => "GALV",
            PipeMaterial::CastIron => "CI",
            PipeMaterial::Concrete => "CONC",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "PVC" | "PLASTIC" => Ok(PipeMaterial::Pvc),
            "CU" | "COPPER" => Ok(PipeMaterial::Copper),
            "SS" | "STAINLESS" | "STAINLESS-STEEL" => Ok(PipeMaterial::Stainless),
            "STEEL" | "COMMERCIAL-STEEL" => Ok(PipeMaterial::CommercialSteel),
            "GALV" | "GALVANIZED" | "GALVANIZED-STEEL" => Ok(PipeMaterial::GalvanizedSteel),
            "CI" | "CAST-IRON" => Ok(PipeMaterial::CastIron),
            "CONC" | "CONCRETE" => Ok(PipeMaterial::Concrete),
            _ => Err(CalcError::preset_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PipeMaterial::Pvc => "PVC",
            PipeMaterial::Copper => "Copper",
            PipeMaterial::Stainless => "Stainless Steel",
            PipeMaterial::CommercialSteel => "Commercial Steel",
            PipeMaterial::GalvanizedSteel => "Galvanized Steel",
            PipeMaterial::CastIron => "Cast Iron",
            PipeMaterial::Concrete => "Concrete",
        }
    }
}

impl std::fmt::Display for PipeMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roughness_ordering() {
        // Smooth plastics < steel < galvanized < cast iron < concrete
        assert!(PipeMaterial::Pvc.roughness_mm() < PipeMaterial::CommercialSteel.roughness_mm());
        assert!(
            PipeMaterial::CommercialSteel.roughness_mm()
                < PipeMaterial::GalvanizedSteel.roughness_mm()
        );
        assert!(PipeMaterial::CastIron.roughness_mm() < PipeMaterial::Concrete.roughness_mm());
    }

    #[test]
    fn test_parsing() {
        assert_eq!(
            PipeMaterial::from_str_flexible("pvc").unwrap(),
            PipeMaterial::Pvc
        );
        assert_eq!(
            PipeMaterial::from_str_flexible("cast iron").unwrap(),
            PipeMaterial::CastIron
        );
        assert!(PipeMaterial::from_str_flexible("unobtanium").is_err());
    }

    #[test]
    fn test_serialization() {
        let mat = PipeMaterial::Pvc;
        let json = serde_json::to_string(&mat).unwrap();
        assert_eq!(json, "\"PVC\"");
        let roundtrip: PipeMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(mat, roundtrip);
    }
}
