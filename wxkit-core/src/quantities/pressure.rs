//! Atmospheric Pressure Measurements
//!
//! Pressure carries the altimeter-setting units used on both sides of the
//! Atlantic: hectopascals and millibars (numerically identical), inches of
//! mercury for US altimeter settings, plus pascals, kilopascals, and psi for
//! engineering callers.
//!
//! The pivot unit is the hectopascal. The psi factor is the NIST value
//! 6894.757293168 Pa, applied in both directions - historical snapshots of
//! this library mixed two different psi factors and could not round-trip.
//! Pressures are magnitudes: negative measurements mark the value invalid.

use core::fmt;

use crate::constants::conversion::{
    HPA_PER_INCH_OF_MERCURY, HPA_PER_KILOPASCAL, PASCALS_PER_HPA, PASCALS_PER_PSI,
};
use crate::errors::{QuantityError, QuantityResult};
use crate::traits::{MeasurementUnit, Quantity};

use super::log_warn;

/// Units of atmospheric pressure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureUnit {
    /// Hectopascals - the pivot unit
    Hectopascals,
    /// Inches of mercury
    InchesOfMercury,
    /// Kilopascals
    Kilopascals,
    /// Millibars (numerically identical to hectopascals)
    Millibars,
    /// Pascals
    Pascals,
    /// Pounds per square inch
    Psi,
}

impl PressureUnit {
    /// Express a measurement in this unit as hectopascals
    pub fn to_hpa(&self, value: f64) -> f64 {
        match self {
            Self::Hectopascals | Self::Millibars => value,
            Self::InchesOfMercury => value * HPA_PER_INCH_OF_MERCURY,
            Self::Kilopascals => value * HPA_PER_KILOPASCAL,
            Self::Pascals => value / PASCALS_PER_HPA,
            Self::Psi => value * PASCALS_PER_PSI / PASCALS_PER_HPA,
        }
    }

    /// Express a measurement in hectopascals in this unit
    pub fn from_hpa(&self, hpa: f64) -> f64 {
        match self {
            Self::Hectopascals | Self::Millibars => hpa,
            Self::InchesOfMercury => hpa / HPA_PER_INCH_OF_MERCURY,
            Self::Kilopascals => hpa / HPA_PER_KILOPASCAL,
            Self::Pascals => hpa * PASCALS_PER_HPA,
            Self::Psi => hpa * PASCALS_PER_HPA / PASCALS_PER_PSI,
        }
    }
}

impl MeasurementUnit for PressureUnit {
    fn symbol(&self) -> &'static str {
        match self {
            Self::Hectopascals => "hPa",
            Self::InchesOfMercury => "inHg",
            Self::Kilopascals => "kPa",
            Self::Millibars => "mb",
            Self::Pascals => "Pa",
            Self::Psi => "psi",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An atmospheric pressure measurement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pressure {
    measurement: f64,
    unit: PressureUnit,
    valid: bool,
}

impl Pressure {
    /// Create a pressure; negative measurements are retained but marked
    /// invalid
    pub fn new(measurement: f64, unit: PressureUnit) -> Self {
        let valid = measurement >= 0.0;
        if !valid {
            log_warn!("invalid pressure: {} {}", measurement, unit.symbol());
        }

        Self {
            measurement,
            unit,
            valid,
        }
    }

    /// The pressure in hectopascals
    pub fn hpa(&self) -> f64 {
        self.get(PressureUnit::Hectopascals)
    }

    /// The pressure in inches of mercury
    pub fn inhg(&self) -> f64 {
        self.get(PressureUnit::InchesOfMercury)
    }

    /// The pressure in kilopascals
    pub fn kpa(&self) -> f64 {
        self.get(PressureUnit::Kilopascals)
    }

    /// The pressure in millibars
    pub fn mb(&self) -> f64 {
        self.get(PressureUnit::Millibars)
    }

    /// The pressure in pascals
    pub fn pa(&self) -> f64 {
        self.get(PressureUnit::Pascals)
    }

    /// The pressure in pounds per square inch
    pub fn psi(&self) -> f64 {
        self.get(PressureUnit::Psi)
    }
}

impl Quantity for Pressure {
    type Unit = PressureUnit;

    const KIND: &'static str = "pressure";

    fn measurement(&self) -> f64 {
        self.measurement
    }

    fn units(&self) -> PressureUnit {
        self.unit
    }

    fn valid(&self) -> bool {
        self.valid
    }

    fn get(&self, unit: PressureUnit) -> f64 {
        unit.from_hpa(self.unit.to_hpa(self.measurement))
    }

    fn convert_to(&self, unit: PressureUnit) -> Self {
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

impl fmt::Display for Pressure {
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
    use crate::constants::physics::SEA_LEVEL_PRESSURE_HPA;

    #[test]
    fn standard_atmosphere_in_inhg() {
        let p = Pressure::new(SEA_LEVEL_PRESSURE_HPA, PressureUnit::Hectopascals);
        assert!((p.inhg() - 29.9213).abs() < 1e-4);
    }

    #[test]
    fn hectopascals_and_millibars_are_identical() {
        let p = Pressure::new(1013.25, PressureUnit::Millibars);
        assert_eq!(p.hpa(), 1013.25);
        assert_eq!(p.mb(), 1013.25);
    }

    #[test]
    fn pascal_family_scales_exactly() {
        let p = Pressure::new(1013.25, PressureUnit::Hectopascals);
        assert_eq!(p.pa(), 101_325.0);
        assert_eq!(p.kpa(), 101.325);
    }

    #[test]
    fn psi_uses_nist_factor() {
        let p = Pressure::new(1.0, PressureUnit::Psi);
        assert!((p.pa() - 6894.757293168).abs() < 1e-6);

        // One atmosphere is 14.696 psi
        let atm = Pressure::new(SEA_LEVEL_PRESSURE_HPA, PressureUnit::Hectopascals);
        assert!((atm.psi() - 14.6959).abs() < 1e-4);
    }

    #[test]
    fn psi_round_trip_is_tight() {
        let p = Pressure::new(29.92, PressureUnit::InchesOfMercury);
        let back = p
            .convert_to(PressureUnit::Psi)
            .convert_to(PressureUnit::InchesOfMercury);
        assert!((back.measurement() - 29.92).abs() / 29.92 < 1e-9);
    }

    #[test]
    fn negative_pressure_is_invalid_but_retained() {
        let p = Pressure::new(-1.0, PressureUnit::Hectopascals);
        assert!(!p.valid());
        assert_eq!(p.measurement(), -1.0);
    }

    #[test]
    fn set_rejects_negative() {
        let p = Pressure::new(1013.25, PressureUnit::Hectopascals);
        assert!(matches!(
            p.set(-0.1),
            Err(QuantityError::NegativeMagnitude { .. })
        ));
        assert_eq!(p.set(990.0).unwrap().measurement(), 990.0);
    }

    #[test]
    fn display_contract() {
        let p = Pressure::new(29.92, PressureUnit::InchesOfMercury);
        assert_eq!(p.to_string(), "29.92 inHg");
        assert_eq!(
            Pressure::new(-1.0, PressureUnit::Pascals).to_string(),
            "invalid Pa"
        );
    }
}
