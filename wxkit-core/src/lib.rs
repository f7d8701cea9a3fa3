//! Core quantity engine for wxkit
//!
//! Handles the physical quantities of aviation/meteorology reporting -
//! angles, distance, pressure, temperature, velocity - with lossless unit
//! conversion and per-kind physical validity rules.
//!
//! Key constraints:
//! - Pure computation: no I/O, no shared state, safe from any thread
//! - no_std compatible (transcendental math via libm)
//! - Out-of-domain input never panics; values carry a validity flag
//!
//! ```
//! use wxkit_core::{Pressure, PressureUnit, Quantity};
//!
//! let altimeter = Pressure::new(1013.25, PressureUnit::Hectopascals);
//!
//! // Read in any sibling unit
//! assert!((altimeter.inhg() - 29.9213).abs() < 1e-4);
//!
//! // Out-of-domain input marks the value invalid instead of panicking
//! let bogus = Pressure::new(-50.0, PressureUnit::Hectopascals);
//! assert!(!bogus.valid());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
pub mod quantities;
pub mod traits;

// Public API
pub use errors::{QuantityError, QuantityResult};
pub use quantities::{
    Degrees, Distance, DistanceUnit, Pressure, PressureUnit, Temperature, TemperatureUnit,
    Velocity, VelocityUnit, WindDirection,
};
pub use traits::{MeasurementUnit, Quantity};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
