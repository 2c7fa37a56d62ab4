//! # Unit Types
//!
//! Type-safe wrappers for the units the calculators convert between. These
//! provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Each calculator uses a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! Conversions are exact constant multiplications; no rounding happens here.
//!
//! ## Example
//!
//! ```rust
//! use bmath_core::units::{Inches, Millimeters, Liters, Gallons};
//!
//! let bore = Inches(2.0);
//! let bore_mm: Millimeters = bore.into();
//! assert_eq!(bore_mm.0, 50.8);
//!
//! let keg = Gallons(5.0);
//! let keg_l: Liters = keg.into();
//! assert!((keg_l.0 - 18.927).abs() < 0.001);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(inches.0 * 25.4)
    }
}

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / 25.4)
    }
}

impl From<Feet> for Meters {
    fn from(ft: Feet) -> Self {
        Meters(ft.0 * 0.3048)
    }
}

impl From<Meters> for Feet {
    fn from(m: Meters) -> Self {
        Feet(m.0 / 0.3048)
    }
}

// ============================================================================
// Pressure Units
// ============================================================================

/// Pressure in kilopascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilopascals(pub f64);

/// Pressure in pounds per square inch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// 1 psi = 6.894757 kPa
pub const KPA_PER_PSI: f64 = 6.894757;

impl From<Psi> for Kilopascals {
    fn from(psi: Psi) -> Self {
        Kilopascals(psi.0 * KPA_PER_PSI)
    }
}

impl From<Kilopascals> for Psi {
    fn from(kpa: Kilopascals) -> Self {
        Psi(kpa.0 / KPA_PER_PSI)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

/// Volume in US gallons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallons(pub f64);

/// 1 US gallon = 3.785411784 L (exact)
pub const LITERS_PER_GALLON: f64 = 3.785411784;

impl From<Gallons> for Liters {
    fn from(gal: Gallons) -> Self {
        Liters(gal.0 * LITERS_PER_GALLON)
    }
}

impl From<Liters> for Gallons {
    fn from(l: Liters) -> Self {
        Gallons(l.0 / LITERS_PER_GALLON)
    }
}

// ============================================================================
// Flow Units
// ============================================================================

/// Volumetric flow in liters per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LitersPerMinute(pub f64);

/// Volumetric flow in US gallons per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GallonsPerMinute(pub f64);

/// Volumetric flow in cubic meters per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMetersPerHour(pub f64);

impl From<GallonsPerMinute> for LitersPerMinute {
    fn from(gpm: GallonsPerMinute) -> Self {
        LitersPerMinute(gpm.0 * LITERS_PER_GALLON)
    }
}

impl From<LitersPerMinute> for GallonsPerMinute {
    fn from(lpm: LitersPerMinute) -> Self {
        GallonsPerMinute(lpm.0 / LITERS_PER_GALLON)
    }
}

impl From<LitersPerMinute> for CubicMetersPerHour {
    fn from(lpm: LitersPerMinute) -> Self {
        // L/min * 60 min/h / 1000 L/m³
        CubicMetersPerHour(lpm.0 * 0.06)
    }
}

impl From<CubicMetersPerHour> for LitersPerMinute {
    fn from(m3h: CubicMetersPerHour) -> Self {
        LitersPerMinute(m3h.0 / 0.06)
    }
}

// ============================================================================
// Temperature Units
// ============================================================================
//
// Temperatures convert affinely, and scaling a temperature is meaningless,
// so these two skip the arithmetic macro.

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
    }
}

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - 32.0) * 5.0 / 9.0)
    }
}

impl Celsius {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Fahrenheit {
    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Inches);
impl_arithmetic!(Meters);
impl_arithmetic!(Feet);
impl_arithmetic!(Kilopascals);
impl_arithmetic!(Psi);
impl_arithmetic!(Liters);
impl_arithmetic!(Gallons);
impl_arithmetic!(LitersPerMinute);
impl_arithmetic!(GallonsPerMinute);
impl_arithmetic!(CubicMetersPerHour);
