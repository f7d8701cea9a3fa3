//! Distance Measurements
//!
//! Distances cover the ranges reported in aviation weather: runway visual
//! range in feet or meters, visibility in statute miles or kilometers, and
//! route distances in nautical miles. Parsecs are included for astronomical
//! callers.
//!
//! All conversions route through feet as the pivot unit, so every factor
//! traces back to [`crate::constants::conversion`]. Distances are
//! magnitudes: a negative measurement marks the value invalid but is
//! retained for inspection.

use core::fmt;
use core::ops::{Add, Sub};

use crate::constants::conversion::{
    FEET_PER_METER, FEET_PER_NAUTICAL_MILE, FEET_PER_STATUTE_MILE, METERS_PER_KILOMETER,
    METERS_PER_PARSEC,
};
use crate::errors::{QuantityError, QuantityResult};
use crate::traits::{MeasurementUnit, Quantity};

use super::log_warn;

/// Units of distance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceUnit {
    /// Feet - the pivot unit
    Feet,
    /// Kilometers
    Kilometers,
    /// International nautical miles (1852 m)
    NauticalMiles,
    /// Meters
    Meters,
    /// Statute miles (5280 ft)
    StatuteMiles,
    /// Parsecs
    Parsecs,
}

impl DistanceUnit {
    /// Express a measurement in this unit as feet
    pub fn to_feet(&self, value: f64) -> f64 {
        match self {
            Self::Feet => value,
            Self::Kilometers => value * METERS_PER_KILOMETER * FEET_PER_METER,
            Self::NauticalMiles => value * FEET_PER_NAUTICAL_MILE,
            Self::Meters => value * FEET_PER_METER,
            Self::StatuteMiles => value * FEET_PER_STATUTE_MILE,
            Self::Parsecs => value * METERS_PER_PARSEC * FEET_PER_METER,
        }
    }

    /// Express a measurement in feet in this unit
    pub fn from_feet(&self, feet: f64) -> f64 {
        match self {
            Self::Feet => feet,
            Self::Kilometers => feet / FEET_PER_METER / METERS_PER_KILOMETER,
            Self::NauticalMiles => feet / FEET_PER_NAUTICAL_MILE,
            Self::Meters => feet / FEET_PER_METER,
            Self::StatuteMiles => feet / FEET_PER_STATUTE_MILE,
            Self::Parsecs => feet / FEET_PER_METER / METERS_PER_PARSEC,
        }
    }
}

impl MeasurementUnit for DistanceUnit {
    fn symbol(&self) -> &'static str {
        match self {
            Self::Feet => "ft",
            Self::Kilometers => "km",
            Self::NauticalMiles => "NM",
            Self::Meters => "m",
            Self::StatuteMiles => "SM",
            Self::Parsecs => "pc",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A distance measurement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance {
    measurement: f64,
    unit: DistanceUnit,
    valid: bool,
}

impl Distance {
    /// Create a distance; negative measurements are retained but marked
    /// invalid
    pub fn new(measurement: f64, unit: DistanceUnit) -> Self {
        let valid = measurement >= 0.0;
        if !valid {
            log_warn!("invalid distance: {} {}", measurement, unit.symbol());
        }

        Self {
            measurement,
            unit,
            valid,
        }
    }

    /// The distance in feet
    pub fn ft(&self) -> f64 {
        self.get(DistanceUnit::Feet)
    }

    /// The distance in kilometers
    pub fn km(&self) -> f64 {
        self.get(DistanceUnit::Kilometers)
    }

    /// The distance in nautical miles
    pub fn nm(&self) -> f64 {
        self.get(DistanceUnit::NauticalMiles)
    }

    /// The distance in meters
    pub fn m(&self) -> f64 {
        self.get(DistanceUnit::Meters)
    }

    /// The distance in statute miles
    pub fn sm(&self) -> f64 {
        self.get(DistanceUnit::StatuteMiles)
    }

    /// The distance in parsecs
    pub fn pc(&self) -> f64 {
        self.get(DistanceUnit::Parsecs)
    }

    /// The absolute value of the distance, in the same unit
    ///
    /// Turns an invalid negative result (from [`Sub`]) back into a valid
    /// magnitude.
    pub fn abs(&self) -> Self {
        Self::new(libm::fabs(self.measurement), self.unit)
    }
}

impl Quantity for Distance {
    type Unit = DistanceUnit;

    const KIND: &'static str = "distance";

    fn measurement(&self) -> f64 {
        self.measurement
    }

    fn units(&self) -> DistanceUnit {
        self.unit
    }

    fn valid(&self) -> bool {
        self.valid
    }

    fn get(&self, unit: DistanceUnit) -> f64 {
        unit.from_feet(self.unit.to_feet(self.measurement))
    }

    fn convert_to(&self, unit: DistanceUnit) -> Self {
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

impl Add for Distance {
    type Output = Distance;

    /// Sum of two distances, in the left operand's unit
    fn add(self, rhs: Distance) -> Distance {
        Distance::new(self.measurement + rhs.get(self.unit), self.unit)
    }
}

impl Sub for Distance {
    type Output = Distance;

    /// Difference of two distances, in the left operand's unit
    ///
    /// A result that crosses zero comes back marked invalid rather than
    /// panicking; check [`Quantity::valid`] or apply [`Distance::abs`].
    fn sub(self, rhs: Distance) -> Distance {
        Distance::new(self.measurement - rhs.get(self.unit), self.unit)
    }
}

impl fmt::Display for Distance {
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
    fn nautical_mile_in_feet_is_exact() {
        let d = Distance::new(1.0, DistanceUnit::NauticalMiles);
        assert_eq!(d.ft(), 6076.11549);
    }

    #[test]
    fn getters_route_through_feet() {
        let d = Distance::new(1.0, DistanceUnit::StatuteMiles);
        assert_eq!(d.ft(), 5280.0);
        assert!((d.km() - 1.609344).abs() < 1e-6);
        assert!((d.m() - 1609.344).abs() < 1e-6);
        assert!((d.nm() - 0.868976).abs() < 1e-6);
    }

    #[test]
    fn parsec_spans_survive_round_trip() {
        let d = Distance::new(1.0, DistanceUnit::Parsecs);
        assert_eq!(d.pc(), 1.0);
        assert!((d.m() - 3.08567758e16).abs() / 3.08567758e16 < 1e-12);

        let back = d.convert_to(DistanceUnit::Meters).convert_to(DistanceUnit::Parsecs);
        assert!((back.measurement() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn negative_distance_is_invalid_but_retained() {
        let d = Distance::new(-100.0, DistanceUnit::Feet);
        assert!(!d.valid());
        assert_eq!(d.measurement(), -100.0);
    }

    #[test]
    fn set_rejects_negative() {
        let d = Distance::new(10.0, DistanceUnit::Meters);
        let err = d.set(-1.0).unwrap_err();
        assert!(matches!(err, QuantityError::NegativeMagnitude { .. }));

        let updated = d.set(25.0).unwrap();
        assert_eq!(updated.measurement(), 25.0);
        assert_eq!(updated.units(), DistanceUnit::Meters);
    }

    #[test]
    fn add_converts_right_operand() {
        let total = Distance::new(1.0, DistanceUnit::NauticalMiles)
            + Distance::new(6076.11549, DistanceUnit::Feet);
        assert_eq!(total.units(), DistanceUnit::NauticalMiles);
        assert!((total.measurement() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn sub_crossing_zero_marks_invalid() {
        let short = Distance::new(1.0, DistanceUnit::Feet);
        let long = Distance::new(2.0, DistanceUnit::Feet);

        let diff = short - long;
        assert!(!diff.valid());
        assert_eq!(diff.measurement(), -1.0);
        assert!(diff.abs().valid());
        assert_eq!(diff.abs().measurement(), 1.0);
    }

    #[test]
    fn display_contract() {
        let d = Distance::new(2.5, DistanceUnit::StatuteMiles);
        assert_eq!(d.to_string(), "2.50 SM");

        let bad = Distance::new(-2.5, DistanceUnit::StatuteMiles);
        assert_eq!(bad.to_string(), "invalid SM");
    }
}
