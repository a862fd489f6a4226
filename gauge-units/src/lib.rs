//! Gauge Units - Physical Quantity and Unit Conversion
//!
//! Provides unit-aware quantities with dimensional analysis.
//! Supports SI, imperial, US customary and binary-prefixed units.
//!
//! Categories:
//! - Length (meter, kilometer, mile, nautical_mile, etc.)
//! - Mass (gram, kilogram, pound, stone, us_ton, etc.)
//! - Time (second, minute, hour, month, century, etc.)
//! - Temperature (kelvin, celsius, fahrenheit)
//! - Area (square meter, hectare, acre, etc.)
//! - Volume (liter, gallon, imperial_pint, cubic foot, etc.)
//! - Velocity (meter/second, mile/hour, knot, etc.)
//! - Energy (joule, kilocalorie, electronvolt, US_therm, etc.)
//! - Pressure (pascal, bar, psi, torr, etc.)
//! - Frequency (hertz, kilohertz, etc.)
//! - Data (bit, byte, kibibyte, petabyte, etc.)
//! - Angle (degree, radian, gradian, arcminute, etc.)
//! - Fuel economy (kilometer/liter, mile/us_gallon, liter/100kilometer)

mod dimension;
mod unit;
mod quantity;
mod convert;
mod parse;
mod units;

pub use dimension::Dimension;
pub use unit::{Unit, DERIVED};
pub use quantity::Quantity;
pub use units::{UNITS, UnitRegistry};
pub use parse::parse_unit;
pub use convert::{convert_units, dimension_of, compatible};
