//! Core traits for quantity values
//!
//! These traits define the interface shared by the tagged quantity kinds
//! (distance, pressure, temperature, velocity). Keep them simple - the kinds
//! differ only in their conversion factors and validity floors, which are
//! pure data, so there is no room for deeper abstraction.
//!
//! Angles are deliberately outside this interface: a normalized bearing has
//! no unit tag and no invalid states, so none of these operations apply.

use crate::errors::QuantityResult;

/// A closed set of units for one quantity kind
///
/// Implemented by the per-kind unit enums. The symbol is the conventional
/// abbreviation used in METAR/TAF-style rendering ("ft", "hPa", "kts", ...).
pub trait MeasurementUnit: Copy + PartialEq {
    /// Conventional abbreviation for this unit
    fn symbol(&self) -> &'static str;
}

/// A measurement paired with the unit it was taken in
///
/// Values are immutable: every transforming operation, including [`set`],
/// returns a new value rather than mutating in place. Conversion is a pure
/// function of the measurement and the unit pair - it never touches external
/// state, so values are freely shareable across threads.
///
/// [`set`]: Quantity::set
pub trait Quantity: Sized {
    /// Unit enumeration for this kind
    type Unit: MeasurementUnit;

    /// Name used in diagnostics ("distance", "pressure", ...)
    const KIND: &'static str;

    /// The raw measurement in the unit reported by [`units`]
    ///
    /// Retained even when the value is invalid, so callers can inspect the
    /// last-attempted measurement alongside the [`valid`] flag.
    ///
    /// [`units`]: Quantity::units
    /// [`valid`]: Quantity::valid
    fn measurement(&self) -> f64;

    /// The unit the measurement is stored in
    fn units(&self) -> Self::Unit;

    /// Whether the measurement satisfies the kind's validity predicate
    fn valid(&self) -> bool;

    /// Read the measurement in any unit of this kind
    fn get(&self, unit: Self::Unit) -> f64;

    /// A new value pinned to the given unit, validity carried through
    fn convert_to(&self, unit: Self::Unit) -> Self;

    /// A new value with the given measurement in the same unit, or an error
    /// if the measurement is outside the kind's domain
    fn set(&self, measurement: f64) -> QuantityResult<Self>;
}
