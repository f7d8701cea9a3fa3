//! Bearings and Wind Direction
//!
//! ## Overview
//!
//! Angles here are compass bearings: degrees clockwise from true north,
//! always normalized into `[0, 360)`. Unlike the tagged quantity kinds there
//! is no unit enumeration - degrees are the stored representation and
//! radians are a derived read - and no validity flag, because every real
//! input has a well-defined normalized bearing.
//!
//! ## Wind Convention
//!
//! Meteorology reports the direction wind blows *from*. A northerly wind is
//! 0° and moves air toward the south, which is why [`Degrees::unit_vector`]
//! negates both components: the vector points where the air is going, the
//! bearing names where it came from.

use core::f64::consts::PI;
use core::ops::{Add, Div, Mul, Sub};

use crate::constants::physics::{DEGREES_PER_REVOLUTION, HALF_REVOLUTION_DEGREES};

/// A bearing normalized into `[0, 360)` degrees from true north
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f64", into = "f64"))]
pub struct Degrees {
    degrees: f64,
}

// Serde round-trips through the raw degree value so deserialized bearings
// pass through the normalizing constructor
impl From<f64> for Degrees {
    fn from(degrees: f64) -> Self {
        Self::new(degrees)
    }
}

impl From<Degrees> for f64 {
    fn from(degrees: Degrees) -> f64 {
        degrees.degrees
    }
}

impl Degrees {
    /// Create a bearing, wrapping any real input into `[0, 360)`
    ///
    /// Negative inputs wrap forward: -450° becomes 270°, -180° becomes 180°.
    pub fn new(degrees: f64) -> Self {
        Self {
            degrees: wrap_degrees(degrees),
        }
    }

    /// The bearing in degrees
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// The bearing in radians
    ///
    /// The stored value is already in `[0, 360)`, so no further
    /// normalization is applied.
    pub fn radians(&self) -> f64 {
        self.degrees * PI / HALF_REVOLUTION_DEGREES
    }

    /// Unit vector of the direction the air moves, given this bearing as
    /// the direction the wind blows from
    ///
    /// Returns `(x, y)` with x pointing east and y pointing north:
    /// a 0° (northerly) wind yields `(0, -1)`.
    pub fn unit_vector(&self) -> (f64, f64) {
        let rad = self.radians();

        (-libm::sin(rad), -libm::cos(rad))
    }
}

/// Floor-style wrap into `[0, 360)`
fn wrap_degrees(degrees: f64) -> f64 {
    let mut wrapped = degrees % DEGREES_PER_REVOLUTION;

    if wrapped < 0.0 {
        wrapped += DEGREES_PER_REVOLUTION;
    }

    // A tiny negative remainder rounds up to exactly 360.0; collapse the
    // boundary so the result always stays below a full revolution
    if wrapped >= DEGREES_PER_REVOLUTION {
        0.0
    } else {
        wrapped
    }
}

impl Add for Degrees {
    type Output = Degrees;

    fn add(self, rhs: Degrees) -> Degrees {
        Degrees::new(self.degrees + rhs.degrees)
    }
}

impl Sub for Degrees {
    type Output = Degrees;

    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees::new(self.degrees - rhs.degrees)
    }
}

impl Mul<f64> for Degrees {
    type Output = Degrees;

    fn mul(self, scalar: f64) -> Degrees {
        Degrees::new(self.degrees * scalar)
    }
}

impl Div<f64> for Degrees {
    type Output = Degrees;

    /// Division by zero returns 0° rather than NaN or a panic
    fn div(self, scalar: f64) -> Degrees {
        if scalar == 0.0 {
            return Degrees::new(0.0);
        }

        Degrees::new(self.degrees / scalar)
    }
}

/// The direction wind is blowing from, in degrees from true north
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f64", into = "f64"))]
pub struct WindDirection {
    degrees: Degrees,
}

impl From<f64> for WindDirection {
    fn from(degrees: f64) -> Self {
        Self::new(degrees)
    }
}

impl From<WindDirection> for f64 {
    fn from(wind: WindDirection) -> f64 {
        wind.degrees.degrees()
    }
}

impl WindDirection {
    /// Create a wind direction, normalizing into `[0, 360)`
    pub fn new(degrees: f64) -> Self {
        Self {
            degrees: Degrees::new(degrees),
        }
    }

    /// The wind direction in degrees from true north
    pub fn degrees(&self) -> Degrees {
        self.degrees
    }

    /// The direction the wind is coming from
    pub fn from(&self) -> Degrees {
        self.degrees
    }

    /// The direction the wind is blowing to - the reciprocal bearing
    pub fn to(&self) -> Degrees {
        Degrees::new(self.degrees.degrees() + HALF_REVOLUTION_DEGREES)
    }

    /// The wind direction in radians from true north
    pub fn radians(&self) -> f64 {
        self.degrees.radians()
    }

    /// Unit vector of the moving air, see [`Degrees::unit_vector`]
    pub fn unit_vector(&self) -> (f64, f64) {
        self.degrees.unit_vector()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn normalizes_into_range() {
        assert_eq!(Degrees::new(0.0).degrees(), 0.0);
        assert_eq!(Degrees::new(360.0).degrees(), 0.0);
        assert_eq!(Degrees::new(540.0).degrees(), 180.0);
        assert_eq!(Degrees::new(-180.0).degrees(), 180.0);
        assert_eq!(Degrees::new(-450.0).degrees(), 270.0);
    }

    #[test]
    fn tiny_negative_input_stays_below_full_revolution() {
        // The remainder of -1e-15 is a tiny negative number; adding 360.0
        // rounds to exactly 360.0, which must collapse to 0.0
        let wrapped = Degrees::new(-1e-15).degrees();
        assert!((0.0..360.0).contains(&wrapped));
        assert_eq!(Degrees::new(wrapped).degrees(), wrapped);

        let wrapped = Degrees::new(-f64::MIN_POSITIVE).degrees();
        assert!((0.0..360.0).contains(&wrapped));
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in [-720.5, -1.0, 0.0, 89.9, 359.999, 1080.25] {
            let once = Degrees::new(raw).degrees();
            let twice = Degrees::new(once).degrees();
            assert_eq!(once, twice);
            assert!((0.0..360.0).contains(&once));
        }
    }

    #[test]
    fn radians_conversion() {
        assert_close(Degrees::new(0.0).radians(), 0.0);
        assert_close(Degrees::new(180.0).radians(), PI);
        assert_close(Degrees::new(90.0).radians(), PI / 2.0);
    }

    #[test]
    fn arithmetic_renormalizes() {
        assert_eq!((Degrees::new(350.0) + Degrees::new(20.0)).degrees(), 10.0);
        assert_eq!((Degrees::new(10.0) - Degrees::new(20.0)).degrees(), 350.0);
        assert_eq!((Degrees::new(90.0) * 5.0).degrees(), 90.0);
        assert_eq!((Degrees::new(90.0) / 2.0).degrees(), 45.0);
    }

    #[test]
    fn divide_by_zero_returns_north() {
        assert_eq!(Degrees::new(90.0) / 0.0, Degrees::new(0.0));
    }

    #[test]
    fn unit_vector_at_cardinal_points() {
        let (x, y) = Degrees::new(0.0).unit_vector();
        assert_close(x, 0.0);
        assert_close(y, -1.0);

        let (x, y) = Degrees::new(90.0).unit_vector();
        assert_close(x, -1.0);
        assert_close(y, 0.0);

        let (x, y) = Degrees::new(180.0).unit_vector();
        assert_close(x, 0.0);
        assert_close(y, 1.0);

        let (x, y) = Degrees::new(270.0).unit_vector();
        assert_close(x, 1.0);
        assert_close(y, 0.0);
    }

    #[test]
    fn reciprocal_bearing() {
        assert_eq!(WindDirection::new(0.0).to().degrees(), 180.0);
        assert_eq!(WindDirection::new(270.0).to().degrees(), 90.0);
        assert_eq!(WindDirection::new(180.0).to().degrees(), 0.0);
    }

    #[test]
    fn wind_direction_delegates_to_bearing() {
        let wind = WindDirection::new(-90.0);
        assert_eq!(wind.from().degrees(), 270.0);
        assert_eq!(wind.degrees(), wind.from());
        assert_close(wind.radians(), 270.0 * PI / 180.0);
        assert_eq!(wind.unit_vector(), Degrees::new(270.0).unit_vector());
    }
}
