//! Value conversion between named units

use gauge_core::{ConvertError, Number};
use crate::{Dimension, Quantity};
use crate::parse::parse_unit;

/// Convert `value` from one unit identifier to another.
///
/// Offset units (celsius, fahrenheit) go through kelvin, reciprocal
/// fuel-economy units through 1/x, everything else through its SI factor.
pub fn convert_units(value: &Number, from: &str, to: &str) -> Result<Number, ConvertError> {
    let from_unit = parse_unit(from)?;
    let to_unit = parse_unit(to)?;

    let quantity = Quantity::new(value.clone(), from_unit);
    let converted = quantity.convert_to(&to_unit)?;
    Ok(converted.value)
}

/// Dimension of a unit identifier, for checking a unit table without converting
pub fn dimension_of(unit: &str) -> Result<Dimension, ConvertError> {
    Ok(parse_unit(unit)?.dimension)
}

/// Whether two identifiers can be converted into each other
pub fn compatible(from: &str, to: &str) -> Result<bool, ConvertError> {
    let a = parse_unit(from)?;
    let b = parse_unit(to)?;
    Ok(a.is_compatible(&b) || a.is_reciprocal(&b))
}
