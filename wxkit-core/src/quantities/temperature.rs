//! Temperature Measurements
//!
//! Temperature differs from the magnitude kinds in two ways. Conversions are
//! affine - a scale and an offset, not a bare factor - and validity depends
//! on the unit: each scale has its own absolute-zero floor (-273.15 °C,
//! -459.67 °F, 0 K, 0 R). The floor check compares against the scale's own
//! constant rather than converting first, so a measurement exactly at the
//! floor is valid on every scale without accumulating conversion error.
//!
//! Celsius is the affine pivot: every read is one transform into Celsius and
//! one transform out.

use core::fmt;

use crate::constants::conversion::{
    CELSIUS_TO_KELVIN_OFFSET, FAHRENHEIT_FREEZING, FAHRENHEIT_PER_CELSIUS,
};
use crate::constants::physics::{
    ABSOLUTE_ZERO_CELSIUS, ABSOLUTE_ZERO_FAHRENHEIT, ABSOLUTE_ZERO_KELVIN, ABSOLUTE_ZERO_RANKINE,
};
use crate::errors::{QuantityError, QuantityResult};
use crate::traits::{MeasurementUnit, Quantity};

use super::log_warn;

/// Temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    /// Celsius - the affine pivot
    Celsius,
    /// Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
    /// Rankine
    Rankine,
}

impl TemperatureUnit {
    /// Express a measurement on this scale in Celsius
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - FAHRENHEIT_FREEZING) / FAHRENHEIT_PER_CELSIUS,
            Self::Kelvin => value - CELSIUS_TO_KELVIN_OFFSET,
            Self::Rankine => value / FAHRENHEIT_PER_CELSIUS - CELSIUS_TO_KELVIN_OFFSET,
        }
    }

    /// Express a Celsius measurement on this scale
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * FAHRENHEIT_PER_CELSIUS + FAHRENHEIT_FREEZING,
            Self::Kelvin => celsius + CELSIUS_TO_KELVIN_OFFSET,
            Self::Rankine => (celsius + CELSIUS_TO_KELVIN_OFFSET) * FAHRENHEIT_PER_CELSIUS,
        }
    }

    /// The absolute-zero floor on this scale
    pub fn floor(&self) -> f64 {
        match self {
            Self::Celsius => ABSOLUTE_ZERO_CELSIUS,
            Self::Fahrenheit => ABSOLUTE_ZERO_FAHRENHEIT,
            Self::Kelvin => ABSOLUTE_ZERO_KELVIN,
            Self::Rankine => ABSOLUTE_ZERO_RANKINE,
        }
    }
}

impl MeasurementUnit for TemperatureUnit {
    fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
            Self::Kelvin => "K",
            Self::Rankine => "R",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A temperature measurement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperature {
    measurement: f64,
    unit: TemperatureUnit,
    valid: bool,
}

impl Temperature {
    /// Create a temperature; measurements below the scale's absolute zero
    /// are retained but marked invalid
    pub fn new(measurement: f64, unit: TemperatureUnit) -> Self {
        // At-floor readings are valid: >=, never >
        let valid = measurement >= unit.floor();
        if !valid {
            log_warn!("invalid temperature: {} {}", measurement, unit.symbol());
        }

        Self {
            measurement,
            unit,
            valid,
        }
    }

    /// The temperature in Celsius
    pub fn c(&self) -> f64 {
        self.get(TemperatureUnit::Celsius)
    }

    /// The temperature in Fahrenheit
    pub fn f(&self) -> f64 {
        self.get(TemperatureUnit::Fahrenheit)
    }

    /// The temperature in Kelvin
    pub fn k(&self) -> f64 {
        self.get(TemperatureUnit::Kelvin)
    }

    /// The temperature in Rankine
    pub fn r(&self) -> f64 {
        self.get(TemperatureUnit::Rankine)
    }
}

impl Quantity for Temperature {
    type Unit = TemperatureUnit;

    const KIND: &'static str = "temperature";

    fn measurement(&self) -> f64 {
        self.measurement
    }

    fn units(&self) -> TemperatureUnit {
        self.unit
    }

    fn valid(&self) -> bool {
        self.valid
    }

    fn get(&self, unit: TemperatureUnit) -> f64 {
        unit.from_celsius(self.unit.to_celsius(self.measurement))
    }

    fn convert_to(&self, unit: TemperatureUnit) -> Self {
        Self {
            measurement: self.get(unit),
            unit,
            valid: self.valid,
        }
    }

    fn set(&self, measurement: f64) -> QuantityResult<Self> {
        if measurement < self.unit.floor() {
            return Err(QuantityError::BelowAbsoluteZero {
                value: measurement,
                unit: self.unit.symbol(),
            });
        }

        Ok(Self::new(measurement, self.unit))
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "invalid {}", self.unit.symbol());
        }

        write!(f, "{:.2} {}", self.measurement, self.unit.symbol())
    }
}
