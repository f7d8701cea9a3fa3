//! Velocity Measurements
//!
//! Velocity covers wind and airspeed reporting: knots for aviation and
//! marine use, kilometers per hour and miles per hour for surface reports,
//! and the per-second units for engineering work.
//!
//! The pivot unit is feet per second. The "per hour" units derive their
//! factors from the distance table divided by seconds-per-hour, so the
//! distance and velocity kinds can never disagree about how long a nautical
//! mile is. This also fixes a historical defect where the knots-to-mph read
//! multiplied by the inverse factor (0.869 instead of 1.15078).
//! Velocities are magnitudes: negative measurements mark the value invalid.

use core::fmt;

use crate::constants::conversion::{
    FEET_PER_METER, FEET_PER_NAUTICAL_MILE, FEET_PER_STATUTE_MILE, METERS_PER_KILOMETER,
    SECONDS_PER_HOUR,
};
use crate::errors::{QuantityError, QuantityResult};
use crate::traits::{MeasurementUnit, Quantity};

use super::log_warn;

/// Units of velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VelocityUnit {
    /// Feet per second - the pivot unit
    FeetPerSecond,
    /// Knots (nautical miles per hour)
    Knots,
    /// Kilometers per hour
    KilometersPerHour,
    /// Miles per hour (statute)
    MilesPerHour,
    /// Meters per second
    MetersPerSecond,
}

impl VelocityUnit {
    /// Express a measurement in this unit as feet per second
    pub fn to_fps(&self, value: f64) -> f64 {
        match self {
            Self::FeetPerSecond => value,
            Self::Knots => value * FEET_PER_NAUTICAL_MILE / SECONDS_PER_HOUR,
            Self::KilometersPerHour => {
                value * METERS_PER_KILOMETER * FEET_PER_METER / SECONDS_PER_HOUR
            }
            Self::MilesPerHour => value * FEET_PER_STATUTE_MILE / SECONDS_PER_HOUR,
            Self::MetersPerSecond => value * FEET_PER_METER,
        }
    }

    /// Express a measurement in feet per second in this unit
    pub fn from_fps(&self, fps: f64) -> f64 {
        match self {
            Self::FeetPerSecond => fps,
            Self::Knots => fps * SECONDS_PER_HOUR / FEET_PER_NAUTICAL_MILE,
            Self::KilometersPerHour => {
                fps * SECONDS_PER_HOUR / FEET_PER_METER / METERS_PER_KILOMETER
            }
            Self::MilesPerHour => fps * SECONDS_PER_HOUR / FEET_PER_STATUTE_MILE,
            Self::MetersPerSecond => fps / FEET_PER_METER,
        }
    }
}

impl MeasurementUnit for VelocityUnit {
    fn symbol(&self) -> &'static str {
        match self {
            Self::FeetPerSecond => "fps",
            Self::Knots => "kts",
            Self::KilometersPerHour => "kph",
            Self::MilesPerHour => "mph",
            Self::MetersPerSecond => "mps",
        }
    }
}

impl fmt::Display for VelocityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A velocity measurement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    measurement: f64,
    unit: VelocityUnit,
    valid: bool,
}

impl Velocity {
    /// Create a velocity; negative measurements are retained but marked
    /// invalid
    pub fn new(measurement: f64, unit: VelocityUnit) -> Self {
        let valid = measurement >= 0.0;
        if !valid {
            log_warn!("invalid velocity: {} {}", measurement, unit.symbol());
        }

        Self {
            measurement,
            unit,
            valid,
        }
    }

    /// The velocity in feet per second
    pub fn fps(&self) -> f64 {
        self.get(VelocityUnit::FeetPerSecond)
    }

    /// The velocity in knots
    pub fn kts(&self) -> f64 {
        self.get(VelocityUnit::Knots)
    }

    /// The velocity in kilometers per hour
    pub fn kph(&self) -> f64 {
        self.get(VelocityUnit::KilometersPerHour)
    }

    /// The velocity in miles per hour
    pub fn mph(&self) -> f64 {
        self.get(VelocityUnit::MilesPerHour)
    }

    /// The velocity in meters per second
    pub fn mps(&self) -> f64 {
        self.get(VelocityUnit::MetersPerSecond)
    }
}

impl Quantity for Velocity {
    type Unit = VelocityUnit;

    const KIND: &'static str = "velocity";

    fn measurement(&self) -> f64 {
        self.measurement
    }

    fn units(&self) -> VelocityUnit {
        self.unit
    }

    fn valid(&self) -> bool {
        self.valid
    }

    fn get(&self, unit: VelocityUnit) -> f64 {
        unit.from_fps(self.unit.to_fps(self.measurement))
    }

    fn convert_to(&self, unit: VelocityUnit) -> Self {
        Self {
            measurement: self.get(unit),
            unit,
            valid: self.valid,
        }
    }

    fn set(&self, measurement: f64) -> QuantityResult<Self> {
        if measurement < 0.0 {
            return Err(QuantityError::NegativeMagnitude {
                quantity: Self::KIND,
                value: measurement,
            });
        }

        Ok(Self::new(measurement, self.unit))
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "invalid {}", self.unit.symbol());
        }

        write!(f, "{:.2} {}", self.measurement, self.unit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_knot_in_sibling_units() {
        let v = Velocity::new(1.0, VelocityUnit::Knots);
        assert!((v.mph() - 1.15078).abs() < 1e-4);
        assert!((v.kph() - 1.852).abs() < 1e-4);
        assert!((v.mps() - 0.514444).abs() < 1e-4);
        assert!((v.fps() - 1.68781).abs() < 1e-4);
    }

    #[test]
    fn meters_per_second_round_trip() {
        let v = Velocity::new(10.0, VelocityUnit::MetersPerSecond);
        assert!((v.fps() - 32.80839895).abs() < 1e-6);

        let back = v
            .convert_to(VelocityUnit::KilometersPerHour)
            .convert_to(VelocityUnit::MetersPerSecond);
        assert!((back.measurement() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn velocity_factors_agree_with_distance_table() {
        // A 60 kt ground speed covers 60 NM in an hour
        let v = Velocity::new(60.0, VelocityUnit::Knots);
        let feet_per_hour = v.fps() * 3600.0;
        assert!((feet_per_hour - 60.0 * 6076.11549).abs() < 1e-6);
    }

    #[test]
    fn negative_velocity_is_invalid_but_retained() {
        let v = Velocity::new(-5.0, VelocityUnit::Knots);
        assert!(!v.valid());
        assert_eq!(v.measurement(), -5.0);
    }

    #[test]
    fn set_rejects_negative() {
        let v = Velocity::new(12.0, VelocityUnit::Knots);
        assert!(matches!(
            v.set(-12.0),
            Err(QuantityError::NegativeMagnitude { .. })
        ));
        assert_eq!(v.set(15.0).unwrap().measurement(), 15.0);
    }

    #[test]
    fn display_contract() {
        let v = Velocity::new(12.0, VelocityUnit::Knots);
        assert_eq!(v.to_string(), "12.00 kts");
        assert_eq!(
            Velocity::new(-12.0, VelocityUnit::Knots).to_string(),
            "invalid kts"
        );
    }
}
