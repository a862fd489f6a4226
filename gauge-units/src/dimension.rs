//! Physical dimensions as exponent vectors
//!
//! Each physical quantity has dimensions represented as an 8-element vector:
//! [length, mass, time, current, temperature, amount, luminosity, information]
//!
//! Information (bits) is not an SI base quantity, but giving it its own slot
//! keeps storage and data-rate units apart from dimensionless angles.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Number of base dimensions tracked
pub const BASE_COUNT: usize = 8;

/// Exponents over the base dimensions, e.g. velocity is L^1 T^-1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, amount, luminosity, information]
    pub exponents: [i32; BASE_COUNT],
}

impl Dimension {
    // Base and common derived dimensions
    pub const DIMENSIONLESS: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 0, 0] };
    pub const LENGTH: Dimension = Dimension { exponents: [1, 0, 0, 0, 0, 0, 0, 0] };
    pub const MASS: Dimension = Dimension { exponents: [0, 1, 0, 0, 0, 0, 0, 0] };
    pub const TIME: Dimension = Dimension { exponents: [0, 0, 1, 0, 0, 0, 0, 0] };
    pub const TEMPERATURE: Dimension = Dimension { exponents: [0, 0, 0, 0, 1, 0, 0, 0] };
    pub const INFORMATION: Dimension = Dimension { exponents: [0, 0, 0, 0, 0, 0, 0, 1] };
    pub const VELOCITY: Dimension = Dimension { exponents: [1, 0, -1, 0, 0, 0, 0, 0] };
    pub const ENERGY: Dimension = Dimension { exponents: [2, 1, -2, 0, 0, 0, 0, 0] };
    pub const PRESSURE: Dimension = Dimension { exponents: [-1, 1, -2, 0, 0, 0, 0, 0] };
    pub const AREA: Dimension = Dimension { exponents: [2, 0, 0, 0, 0, 0, 0, 0] };
    pub const VOLUME: Dimension = Dimension { exponents: [3, 0, 0, 0, 0, 0, 0, 0] };
    pub const FREQUENCY: Dimension = Dimension { exponents: [0, 0, -1, 0, 0, 0, 0, 0] };
    pub const DATA_RATE: Dimension = Dimension { exponents: [0, 0, -1, 0, 0, 0, 0, 1] };
    pub const FUEL_ECONOMY: Dimension = Dimension { exponents: [-2, 0, 0, 0, 0, 0, 0, 0] };

    pub fn new(exponents: [i32; BASE_COUNT]) -> Self {
        Dimension { exponents }
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Exponents add; `None` when one leaves the `i32` range
    pub fn multiply(&self, other: &Dimension) -> Option<Dimension> {
        let mut exponents = self.exponents;
        for (e, o) in exponents.iter_mut().zip(other.exponents) {
            *e = e.checked_add(o)?;
        }
        Some(Self { exponents })
    }

    pub fn divide(&self, other: &Dimension) -> Option<Dimension> {
        self.multiply(&other.invert()?)
    }

    /// Exponents scale; `None` on overflow
    pub fn power(&self, exp: i32) -> Option<Dimension> {
        let mut exponents = self.exponents;
        for e in exponents.iter_mut() {
            *e = e.checked_mul(exp)?;
        }
        Some(Self { exponents })
    }

    pub fn invert(&self) -> Option<Dimension> {
        self.power(-1)
    }

    /// True when `other` is exactly the inverse of this dimension
    pub fn is_reciprocal_of(&self, other: &Dimension) -> bool {
        !self.is_dimensionless()
            && self.exponents
                .iter()
                .zip(other.exponents)
                .all(|(&e, o)| i64::from(e) == -i64::from(o))
    }

    /// Common name, when there is one
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Self::DIMENSIONLESS => Some("dimensionless"),
            Self::LENGTH => Some("length"),
            Self::MASS => Some("mass"),
            Self::TIME => Some("time"),
            Self::TEMPERATURE => Some("temperature"),
            Self::INFORMATION => Some("information"),
            Self::VELOCITY => Some("velocity"),
            Self::ENERGY => Some("energy"),
            Self::PRESSURE => Some("pressure"),
            Self::AREA => Some("area"),
            Self::VOLUME => Some("volume"),
            Self::FREQUENCY => Some("frequency"),
            Self::DATA_RATE => Some("data rate"),
            Self::FUEL_ECONOMY => Some("fuel economy"),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SYMBOLS: [&str; BASE_COUNT] = ["L", "M", "T", "I", "Θ", "N", "J", "b"];

        let mut first = true;
        for (symbol, exp) in SYMBOLS.iter().zip(self.exponents) {
            if exp == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            match exp {
                1 => f.write_str(symbol)?,
                _ => write!(f, "{symbol}^{exp}")?,
            }
        }

        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}
