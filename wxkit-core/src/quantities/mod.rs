//! Physical Quantity Kinds
//!
//! ## Overview
//!
//! This module contains the five quantity kinds used in aviation and
//! meteorology reporting: angles (wind direction), distance, pressure,
//! temperature, and velocity. Each kind pairs a measurement with the unit it
//! was taken in and converts losslessly to every sibling unit.
//!
//! ## Conversion Model
//!
//! Values are not normalized to a base unit at rest - each value remembers
//! its own unit, so a report parsed in inches of mercury renders back in
//! inches of mercury without drift. Cross-unit reads route through a single
//! pivot unit per kind (feet, hectopascals, Celsius, feet per second), so
//! every conversion is at most two multiplications away from the constants
//! in [`crate::constants::conversion`].
//!
//! ## Validity Model
//!
//! Each kind applies its validity predicate at construction time:
//!
//! - Distance, pressure, and velocity are magnitudes: `valid` exactly when
//!   the measurement is zero or greater
//! - Temperature is valid when the measurement is at or above the absolute
//!   zero of its own scale (-273.15 °C, -459.67 °F, 0 K, 0 R)
//! - Angles have no invalid states: every input normalizes into `[0, 360)`
//!
//! Invalid construction never panics. The value keeps the out-of-range
//! measurement, reports `valid() == false`, and renders as `"invalid <unit>"`.
//!
//! ## Usage Example
//!
//! ```rust
//! use wxkit_core::{Distance, DistanceUnit, Quantity};
//!
//! let visibility = Distance::new(1.0, DistanceUnit::NauticalMiles);
//! assert!(visibility.valid());
//! assert_eq!(visibility.ft(), 6076.11549);
//! ```

mod angle;
mod distance;
mod pressure;
mod temperature;
mod velocity;

pub use angle::{Degrees, WindDirection};
pub use distance::{Distance, DistanceUnit};
pub use pressure::{Pressure, PressureUnit};
pub use temperature::{Temperature, TemperatureUnit};
pub use velocity::{Velocity, VelocityUnit};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub(crate) use log_warn;
