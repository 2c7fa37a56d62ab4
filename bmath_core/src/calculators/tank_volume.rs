//! # Tank Volume Calculator
//!
//! Capacity and partial-fill volume for common tank shapes. The horizontal
//! cylinder uses the circular-segment closed form; the other shapes scale
//! linearly with fill height.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Tank geometry with dimensions in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TankGeometry {
    /// Upright cylinder (fill height measured along the axis)
    VerticalCylinder { diameter_cm: f64, height_cm: f64 },
    /// Cylinder on its side (fill height measured across the diameter)
    HorizontalCylinder { diameter_cm: f64, length_cm: f64 },
    /// Rectangular tank
    Rectangular {
        length_cm: f64,
        width_cm: f64,
        height_cm: f64,
    },
}

impl TankGeometry {
    /// Maximum meaningful fill height for this geometry (cm)
    pub fn max_fill_cm(&self) -> f64 {
        match self {
            TankGeometry::VerticalCylinder { height_cm, .. } => *height_cm,
            TankGeometry::HorizontalCylinder { diameter_cm, .. } => *diameter_cm,
            TankGeometry::Rectangular { height_cm, .. } => *height_cm,
        }
    }

    /// All dimensions as (name, value) pairs for validation
    fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match self {
            TankGeometry::VerticalCylinder {
                diameter_cm,
                height_cm,
            } => vec![("diameter_cm", *diameter_cm), ("height_cm", *height_cm)],
            TankGeometry::HorizontalCylinder {
                diameter_cm,
                length_cm,
            } => vec![("diameter_cm", *diameter_cm), ("length_cm", *length_cm)],
            TankGeometry::Rectangular {
                length_cm,
                width_cm,
                height_cm,
            } => vec![
                ("length_cm", *length_cm),
                ("width_cm", *width_cm),
                ("height_cm", *height_cm),
            ],
        }
    }
}

/// Input parameters for the tank volume calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "geometry": { "type": "HorizontalCylinder", "diameter_cm": 120.0, "length_cm": 300.0 },
///   "fill_height_cm": 45.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankVolumeInput {
    /// Tank shape and dimensions
    pub geometry: TankGeometry,

    /// Liquid level from the tank bottom (clamped into [0, max fill])
    pub fill_height_cm: f64,
}

impl TankVolumeInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (name, value) in self.geometry.dimensions() {
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    name,
                    value.to_string(),
                    "Dimension must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Results from the tank volume calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankVolumeResult {
    /// Total capacity (liters)
    pub capacity_l: f64,

    /// Volume at the given fill height (liters)
    pub filled_l: f64,

    /// Fill level in percent of capacity
    pub fill_pct: f64,

    /// Fill height used after clamping (cm)
    pub fill_height_cm_used: f64,
}

/// Area of a circular segment of depth `h` in a circle of radius `r`.
fn segment_area(r: f64, h: f64) -> f64 {
    // A = r²·acos((r-h)/r) - (r-h)·√(2rh - h²)
    let d = r - h;
    r * r * (d / r).acos() - d * (2.0 * r * h - h * h).sqrt()
}

/// Calculate tank capacity and filled volume.
pub fn calculate(input: &TankVolumeInput) -> CalcResult<TankVolumeResult> {
    input.validate()?;

    let fill = input.fill_height_cm.clamp(0.0, input.geometry.max_fill_cm());

    // Volumes in cm³, converted to liters at the end
    let (capacity_cm3, filled_cm3) = match input.geometry {
        TankGeometry::VerticalCylinder {
            diameter_cm,
            height_cm,
        } => {
            let base = std::f64::consts::FRAC_PI_4 * diameter_cm * diameter_cm;
            (base * height_cm, base * fill)
        }
        TankGeometry::HorizontalCylinder {
            diameter_cm,
            length_cm,
        } => {
            let r = diameter_cm / 2.0;
            let full_area = std::f64::consts::PI * r * r;
            (full_area * length_cm, segment_area(r, fill) * length_cm)
        }
        TankGeometry::Rectangular {
            length_cm,
            width_cm,
            height_cm,
        } => {
            let base = length_cm * width_cm;
            (base * height_cm, base * fill)
        }
    };

    let capacity_l = capacity_cm3 / 1000.0;
    let filled_l = filled_cm3 / 1000.0;

    Ok(TankVolumeResult {
        capacity_l,
        filled_l,
        fill_pct: if capacity_l > 0.0 {
            filled_l / capacity_l * 100.0
        } else {
            0.0
        },
        fill_height_cm_used: fill,
    })
}
