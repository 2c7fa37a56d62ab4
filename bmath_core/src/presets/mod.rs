//! # Preset Tables
//!
//! Static lookup tables of default values keyed by category or region, used
//! to seed calculator inputs. Every preset enum follows the same shape:
//! an `ALL` array for UI selection, a `code()` string, flexible string
//! parsing via `from_str_flexible()`, and a `display_name()`.
//!
//! ## Available Presets
//!
//! - [`pipes`] - Pipe material → absolute roughness
//! - [`fluids`] - Fluid → density and dynamic viscosity
//! - [`events`] - Event type → budget percentage split
//! - [`currency`] - Currency code → symbol and display formatting
//!
//! ## Example
//!
//! ```rust
//! use bmath_core::presets::{PipeMaterial, Fluid};
//!
//! let eps = PipeMaterial::CommercialSteel.roughness_mm();
//! assert_eq!(eps, 0.045);
//!
//! let props = Fluid::Water.properties();
//! assert!(props.density_kg_m3 > 990.0);
//! ```

pub mod currency;
pub mod events;
pub mod fluids;
pub mod pipes;

// Re-export preset types
pub use currency::{CurrencyCode, CurrencyStyle};
pub use events::{BudgetSplit, EventType};
pub use fluids::{Fluid, FluidProperties};
pub use pipes::PipeMaterial;
