//! Error Types for Out-of-Domain Measurements
//!
//! ## Design Philosophy
//!
//! wxkit's error system follows the same rules as the rest of the crate:
//!
//! 1. **Small Size**: each variant carries only a measurement and a static
//!    unit symbol, so errors stay cheap to return from hot conversion paths.
//!
//! 2. **No Heap Allocation**: all error data is inline - no `String`, only
//!    `&'static str` for unit symbols and quantity names. The crate stays
//!    usable without an allocator.
//!
//! 3. **Copy Semantics**: errors implement `Copy` so callers can store or
//!    re-return them without move complications.
//!
//! 4. **Permanent, Not Transient**: invalidity is a property of the input
//!    measurement, never of the environment. There is nothing to retry; the
//!    caller decides whether to reject, clamp, or propagate.
//!
//! ## Error Categories
//!
//! - `NegativeMagnitude`: a distance, pressure, or velocity was given a
//!   negative measurement. These kinds are magnitudes and have no meaningful
//!   negative values in this domain.
//! - `BelowAbsoluteZero`: a temperature was given a measurement below the
//!   physical floor of its scale (-273.15 °C, -459.67 °F, 0 K, 0 R).
//!
//! The historical design also had an "unknown unit" failure for unit tags
//! outside the recognized set. Unit tags here are closed enums, so that
//! state cannot be constructed and no variant exists for it.
//!
//! No operation in this crate panics on out-of-domain input: constructors
//! produce a value marked invalid, and `set` returns one of these errors.

use thiserror_no_std::Error;

/// Result type for quantity operations
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Quantity errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum QuantityError {
    /// A magnitude kind (distance, pressure, velocity) was given a negative
    /// measurement
    #[error("{quantity} cannot be negative: {value}")]
    NegativeMagnitude {
        /// Which quantity kind rejected the measurement
        quantity: &'static str,
        /// The rejected measurement, in the unit it was supplied in
        value: f64,
    },

    /// A temperature measurement fell below the absolute-zero floor of its
    /// scale
    #[error("temperature {value} {unit} is below absolute zero")]
    BelowAbsoluteZero {
        /// The rejected measurement, in the unit it was supplied in
        value: f64,
        /// Symbol of the scale the measurement was supplied in
        unit: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for QuantityError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NegativeMagnitude { quantity, value } =>
                defmt::write!(fmt, "{} cannot be negative: {}", quantity, value),
            Self::BelowAbsoluteZero { value, unit } =>
                defmt::write!(fmt, "temperature {} {} is below absolute zero", value, unit),
        }
    }
}
