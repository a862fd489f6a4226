//! Quantity type - a value tagged with its unit

use std::fmt;
use serde::{Serialize, Deserialize};
use gauge_core::{ConvertError, Number};
use crate::{Dimension, Unit};

/// A physical quantity: a numeric value with an associated unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quantity {
    pub value: Number,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: Number, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension
    }

    /// Get the value in SI base units
    pub fn si_value(&self) -> Number {
        self.unit.to_si(&self.value)
    }

    /// Re-express this quantity in another unit
    pub fn convert_to(&self, target: &Unit) -> Result<Quantity, ConvertError> {
        let new_value = self.unit.convert_to(&self.value, target)?;
        Ok(Quantity::new(new_value, target.clone()))
    }

    /// The bare magnitude
    pub fn magnitude(&self) -> &Number {
        &self.value
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.dimension.is_dimensionless() && self.unit.symbol == "1" {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit.symbol)
        }
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        // Compare SI values for equality
        self.unit.is_compatible(&other.unit) && self.si_value() == other.si_value()
    }
}
