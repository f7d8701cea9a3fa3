//! Conversion Factor Tables
//!
//! The authoritative scalar constants relating every unit within a kind.
//! Each kind routes conversions through a single pivot unit:
//!
//! - **Distance**: feet
//! - **Pressure**: hectopascals (numerically identical to millibars)
//! - **Velocity**: feet per second, derived from the distance factors
//! - **Temperature**: Celsius, as the affine (scale + offset) pivot
//!
//! Every cross-unit read in the crate is `from_pivot(to_pivot(value))`, so
//! these constants are the entire ground truth of the conversion model.

// ===== DISTANCE (pivot: feet) =====

/// Feet per meter.
///
/// Exact inverse of the international foot definition (1 ft = 0.3048 m),
/// truncated to the precision used in aviation publications.
///
/// Source: NIST Handbook 44, Appendix C
pub const FEET_PER_METER: f64 = 3.280839895;

/// Feet per international nautical mile.
///
/// The nautical mile is defined as exactly 1852 m; this is 1852 m expressed
/// in feet. Used directly for knots as nautical miles per hour.
///
/// Source: ICAO Annex 5 (1 NM = 1852 m)
pub const FEET_PER_NAUTICAL_MILE: f64 = 6_076.11549;

/// Feet per statute mile (exact by definition).
///
/// Source: international yard and pound agreement, 1959
pub const FEET_PER_STATUTE_MILE: f64 = 5_280.0;

/// Meters per parsec.
///
/// One parsec is the distance at which one astronomical unit subtends one
/// arcsecond. Far outside aviation usage, but kept for visibility reports
/// with a sense of humor and for astronomical callers.
///
/// Source: IAU 2015 Resolution B2
pub const METERS_PER_PARSEC: f64 = 3.08567758e16;

// ===== PRESSURE (pivot: hectopascals) =====

/// Pascals per pound-force per square inch.
///
/// Authoritative NIST value. Historical snapshots of this library disagreed
/// between 6894.76 and a per-hPa variant applied inconsistently; this single
/// constant is used for both directions so psi round-trips are exact.
///
/// Source: NIST Special Publication 811, Appendix B
pub const PASCALS_PER_PSI: f64 = 6_894.757293168;

/// Hectopascals per inch of mercury.
///
/// Conventional inch of mercury at 0 °C, as used for US altimeter settings.
///
/// Source: NIST Special Publication 811 (1 inHg = 3386.39 Pa)
pub const HPA_PER_INCH_OF_MERCURY: f64 = 33.8639;

/// Pascals per hectopascal (exact).
pub const PASCALS_PER_HPA: f64 = 100.0;

/// Hectopascals per kilopascal (exact).
pub const HPA_PER_KILOPASCAL: f64 = 10.0;

// ===== VELOCITY (pivot: feet per second) =====

/// Seconds per hour (exact).
///
/// Converts the "per hour" distance rates (knots, mph, km/h) to and from the
/// feet-per-second pivot.
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Meters per kilometer (exact).
pub const METERS_PER_KILOMETER: f64 = 1_000.0;

// ===== TEMPERATURE (pivot: Celsius, affine) =====

/// Fahrenheit degrees per Celsius degree (exact, 9/5).
pub const FAHRENHEIT_PER_CELSIUS: f64 = 1.8;

/// Fahrenheit reading at the freezing point of water (exact).
pub const FAHRENHEIT_FREEZING: f64 = 32.0;

/// Offset from Celsius to Kelvin (exact by definition of the kelvin).
///
/// Source: SI Brochure, 9th edition
pub const CELSIUS_TO_KELVIN_OFFSET: f64 = 273.15;
