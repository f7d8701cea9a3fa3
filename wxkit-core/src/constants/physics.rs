//! Physical Constants for wxkit
//!
//! Physical limits and reference values used by the validity predicates and
//! the angle model. All values are based on established physics and aviation
//! standards.

// ===== TEMPERATURE FLOORS =====

/// Absolute zero in Celsius (°C).
///
/// The theoretical lower limit of temperature where molecular motion ceases.
/// No measurement on any scale may map below this point.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Absolute zero in Fahrenheit (°F).
///
/// The same physical floor expressed on the Fahrenheit scale. Kept as its
/// own constant so the Fahrenheit validity check compares directly against
/// the scale's floor instead of converting first and accumulating error.
///
/// Source: -273.15 °C × 9/5 + 32
pub const ABSOLUTE_ZERO_FAHRENHEIT: f64 = -459.67;

/// Absolute zero in Kelvin (K).
///
/// The kelvin is an absolute scale; its zero is the physical floor.
pub const ABSOLUTE_ZERO_KELVIN: f64 = 0.0;

/// Absolute zero in Rankine (R).
///
/// Rankine is the absolute counterpart of Fahrenheit; zero is the floor.
pub const ABSOLUTE_ZERO_RANKINE: f64 = 0.0;

// ===== ATMOSPHERE REFERENCE =====

/// Standard atmospheric pressure at sea level (hPa).
///
/// Reference pressure for altimetry and the standard atmosphere. Equals
/// 29.92 inHg, the US altimeter-setting convention.
///
/// Source: International Standard Atmosphere (ISA)
pub const SEA_LEVEL_PRESSURE_HPA: f64 = 1013.25;

// ===== ANGLES =====

/// Degrees in one full revolution (exact).
pub const DEGREES_PER_REVOLUTION: f64 = 360.0;

/// Degrees in half a revolution (exact).
///
/// The rotation between a bearing and its reciprocal.
pub const HALF_REVOLUTION_DEGREES: f64 = 180.0;
