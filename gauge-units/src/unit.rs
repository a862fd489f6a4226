//! Named and derived units

use std::fmt;
use serde::{Deserialize, Serialize};
use gauge_core::{ConvertError, Number};
use crate::Dimension;

/// Category given to units built from expressions like "m/s"
pub const DERIVED: &str = "derived";

/// A unit of measurement.
///
/// Values map to SI as `si = value * to_si_factor + to_si_offset`; the
/// offset is zero for everything except celsius and fahrenheit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub symbol: String,
    pub name: String,
    pub dimension: Dimension,
    pub to_si_factor: Number,
    pub to_si_offset: Number,
    /// "length", "fuel economy", ... or [`DERIVED`]
    pub category: String,
}

impl Unit {
    pub fn new(symbol: &str, name: &str, dimension: Dimension, factor: Number, category: &str) -> Self {
        Self::with_offset(symbol, name, dimension, factor, Number::from_i64(0), category)
    }

    /// An affine unit such as celsius
    pub fn with_offset(
        symbol: &str,
        name: &str,
        dimension: Dimension,
        factor: Number,
        offset: Number,
        category: &str,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            dimension,
            to_si_factor: factor,
            to_si_offset: offset,
            category: category.into(),
        }
    }

    /// The pure number "1"
    pub fn dimensionless() -> Self {
        Self::new("1", "dimensionless", Dimension::DIMENSIONLESS, Number::from_i64(1), "dimensionless")
    }

    /// Offsets do not survive multiplication, so derived units are linear
    fn derived(symbol: String, name: String, dimension: Dimension, factor: Number) -> Self {
        Self {
            symbol,
            name,
            dimension,
            to_si_factor: factor,
            to_si_offset: Number::from_i64(0),
            category: DERIVED.into(),
        }
    }

    pub fn has_offset(&self) -> bool {
        !self.to_si_offset.is_zero()
    }

    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Two named units of the same category whose dimensions are inverses
    /// (km/L against L/100km) convert through the reciprocal.
    pub fn is_reciprocal(&self, other: &Unit) -> bool {
        self.category != DERIVED
            && self.category == other.category
            && self.dimension.is_reciprocal_of(&other.dimension)
    }

    pub fn to_si(&self, value: &Number) -> Number {
        value.mul(&self.to_si_factor).add(&self.to_si_offset)
    }

    pub fn from_si(&self, si: &Number) -> Result<Number, ConvertError> {
        Ok(si.sub(&self.to_si_offset).checked_div(&self.to_si_factor)?)
    }

    /// Re-express `value` of this unit in `target`
    pub fn convert_to(&self, value: &Number, target: &Unit) -> Result<Number, ConvertError> {
        if self.is_compatible(target) {
            return target.from_si(&self.to_si(value));
        }

        if self.is_reciprocal(target) {
            let inverted = self.to_si(value).recip()?;
            return Ok(inverted.checked_div(&target.to_si_factor)?);
        }

        Err(ConvertError::IncompatibleUnits {
            from: self.name.clone(),
            to: target.name.clone(),
            from_dim: self.dimension.to_string(),
            to_dim: target.dimension.to_string(),
        })
    }

    /// This unit times a pure number (the "100" in "100kilometer")
    pub fn scale(&self, factor: &Number, label: &str) -> Unit {
        Self::derived(
            format!("{label}{}", self.symbol),
            format!("{label} {}", self.name),
            self.dimension,
            self.to_si_factor.mul(factor),
        )
    }

    /// `kg·m`
    pub fn multiply(&self, other: &Unit) -> Result<Unit, ConvertError> {
        let symbol = format!("{}·{}", self.symbol, other.symbol);
        let dimension = self.dimension
            .multiply(&other.dimension)
            .ok_or_else(|| ConvertError::UnknownUnit(symbol.clone()))?;
        Ok(Self::derived(
            symbol,
            format!("{} {}", self.name, other.name),
            dimension,
            self.to_si_factor.mul(&other.to_si_factor),
        ))
    }

    /// `m/s`
    pub fn divide(&self, other: &Unit) -> Result<Unit, ConvertError> {
        let symbol = format!("{}/{}", self.symbol, other.symbol);
        let dimension = self.dimension
            .divide(&other.dimension)
            .ok_or_else(|| ConvertError::UnknownUnit(symbol.clone()))?;
        Ok(Self::derived(
            symbol,
            format!("{} per {}", self.name, other.name),
            dimension,
            self.to_si_factor.checked_div(&other.to_si_factor)?,
        ))
    }

    /// `m^2`; the first power is the unit itself
    pub fn power(&self, exp: i32) -> Result<Unit, ConvertError> {
        if exp == 1 {
            return Ok(self.clone());
        }
        let symbol = format!("{}^{exp}", self.symbol);
        let dimension = self.dimension
            .power(exp)
            .ok_or_else(|| ConvertError::UnknownUnit(symbol.clone()))?;
        Ok(Self::derived(
            symbol,
            format!("{} to the {exp}", self.name),
            dimension,
            self.to_si_factor.pow(exp),
        ))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    fn unit(symbol: &str, dimension: Dimension, factor: &str, category: &str) -> Unit {
        Unit::new(symbol, symbol, dimension, n(factor), category)
    }

    fn celsius() -> Unit {
        Unit::with_offset("degC", "celsius", Dimension::TEMPERATURE, n("1"), n("273.15"), "temperature")
    }

    #[test]
    fn test_same_dimension_is_compatible() {
        let m = unit("m", Dimension::LENGTH, "1", "length");
        let ft = unit("ft", Dimension::LENGTH, "0.3048", "length");
        let s = unit("s", Dimension::TIME, "1", "time");
        assert!(m.is_compatible(&ft));
        assert!(!m.is_compatible(&s));
    }

    #[test]
    fn test_si_round_trip() {
        let mi = unit("mi", Dimension::LENGTH, "1609.344", "length");
        let si = mi.to_si(&n("2"));
        assert_eq!(si, n("3218.688"));
        assert_eq!(mi.from_si(&si).unwrap(), n("2"));
    }

    #[test]
    fn test_ratio_conversion_is_exact() {
        let m = unit("m", Dimension::LENGTH, "1", "length");
        let km = unit("km", Dimension::LENGTH, "1000", "length");
        assert_eq!(m.convert_to(&n("1000"), &km).unwrap(), n("1"));
    }

    #[test]
    fn test_affine_conversion() {
        let k = unit("K", Dimension::TEMPERATURE, "1", "temperature");
        assert!(celsius().has_offset());
        assert!(!k.has_offset());
        assert_eq!(celsius().convert_to(&n("100"), &k).unwrap(), n("373.15"));
        assert_eq!(k.convert_to(&n("0"), &celsius()).unwrap(), n("-273.15"));
    }

    #[test]
    fn test_incompatible_conversion() {
        let m = Unit::new("m", "meter", Dimension::LENGTH, n("1"), "length");
        let kg = Unit::new("kg", "kilogram", Dimension::MASS, n("1"), "mass");
        let err = m.convert_to(&n("1"), &kg).unwrap_err();
        assert!(matches!(err, ConvertError::IncompatibleUnits { .. }));
        assert!(err.to_string().contains("meter"));
    }

    #[test]
    fn test_reciprocal_needs_shared_category() {
        let hz = unit("Hz", Dimension::FREQUENCY, "1", "frequency");
        let s = unit("s", Dimension::TIME, "1", "time");
        assert!(!hz.is_reciprocal(&s));
        assert!(hz.convert_to(&n("2"), &s).is_err());
    }

    #[test]
    fn test_reciprocal_conversion() {
        // km/L = 1e6 m^-2, L/100km = 1e-8 m^2
        let km_per_l = unit("km/L", Dimension::FUEL_ECONOMY, "1000000", "fuel economy");
        let l_per_100km = unit("L/100km", Dimension::AREA, "0.00000001", "fuel economy");

        assert_eq!(km_per_l.convert_to(&n("20"), &l_per_100km).unwrap(), n("5"));
        assert!(matches!(
            km_per_l.convert_to(&n("0"), &l_per_100km),
            Err(ConvertError::Numeric(_))
        ));
    }

    #[test]
    fn test_derived_units() {
        let m = unit("m", Dimension::LENGTH, "1", "length");
        let km = unit("km", Dimension::LENGTH, "1000", "length");
        let h = unit("h", Dimension::TIME, "3600", "time");

        let area = m.power(2).unwrap();
        assert_eq!(area.symbol, "m^2");
        assert_eq!(area.dimension, Dimension::AREA);
        assert_eq!(m.power(1).unwrap(), m);

        let torque = unit("N", Dimension::new([1, 1, -2, 0, 0, 0, 0, 0]), "1", "force")
            .multiply(&m)
            .unwrap();
        assert_eq!(torque.dimension, Dimension::ENERGY);

        let speed = km.divide(&h).unwrap();
        assert_eq!(speed.dimension, Dimension::VELOCITY);
        assert_eq!(speed.category, DERIVED);
        assert_eq!(speed.symbol, "km/h");

        let zero = unit("z", Dimension::TIME, "0", "time");
        assert!(km.divide(&zero).is_err());
    }

    #[test]
    fn test_exponent_overflow_is_an_error() {
        let area = unit("m2", Dimension::AREA, "1", "area");
        assert!(matches!(area.power(1 << 30), Err(ConvertError::UnknownUnit(_))));
    }

    #[test]
    fn test_scale() {
        let km = unit("km", Dimension::LENGTH, "1000", "length");
        let hundred_km = km.scale(&n("100"), "100");
        assert_eq!(hundred_km.symbol, "100km");
        assert_eq!(hundred_km.to_si_factor, n("100000"));
        assert!(!hundred_km.has_offset());
    }
}
