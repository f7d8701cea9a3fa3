//! Constants for wxkit Core
//!
//! This module centralizes every numeric constant the quantity engine relies
//! on. All conversions in the crate derive from these values; nothing else in
//! the codebase carries a magic number.
//!
//! ## Organization
//!
//! - **Conversion**: scalar factors relating units within a kind, one pivot
//!   unit per kind so no O(n²) factor table is needed
//! - **Physics**: physical limits (absolute zero per temperature scale) and
//!   reference values
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, cite the defining standard or measurement
//! 3. Constants are `f64` and compile-time only - never mutable state

/// Conversion factors between units of the same kind.
pub mod conversion;

/// Physical limits and reference values.
pub mod physics;

// Re-export commonly used constants for convenience
pub use conversion::{
    FEET_PER_METER, FEET_PER_NAUTICAL_MILE, FEET_PER_STATUTE_MILE,
    HPA_PER_INCH_OF_MERCURY, PASCALS_PER_PSI, SECONDS_PER_HOUR,
};

pub use physics::{
    ABSOLUTE_ZERO_CELSIUS, ABSOLUTE_ZERO_FAHRENHEIT,
    DEGREES_PER_REVOLUTION, SEA_LEVEL_PRESSURE_HPA,
};
