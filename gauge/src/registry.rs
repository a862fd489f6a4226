//! Category registry: which units are offered for each category, in order

use std::fmt;
use std::str::FromStr;
use serde::Serialize;
use gauge_core::ConvertError;
use gauge_units::{compatible, parse_unit};

/// A conversion category. `Currency` is the only one not served by the
/// units engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Currency,
    Length,
    Area,
    DataTransferRate,
    DigitalStorage,
    Energy,
    Frequency,
    FuelEconomy,
    Mass,
    PlaneAngle,
    Pressure,
    Speed,
    Temperature,
    Time,
    Volume,
}

impl Category {
    /// Every category in presentation order
    pub const ALL: [Category; 15] = [
        Category::Currency,
        Category::Length,
        Category::Area,
        Category::DataTransferRate,
        Category::DigitalStorage,
        Category::Energy,
        Category::Frequency,
        Category::FuelEconomy,
        Category::Mass,
        Category::PlaneAngle,
        Category::Pressure,
        Category::Speed,
        Category::Temperature,
        Category::Time,
        Category::Volume,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Currency => "Currency",
            Category::Length => "Length",
            Category::Area => "Area",
            Category::DataTransferRate => "Data Transfer Rate",
            Category::DigitalStorage => "Digital Storage",
            Category::Energy => "Energy",
            Category::Frequency => "Frequency",
            Category::FuelEconomy => "Fuel Economy",
            Category::Mass => "Mass",
            Category::PlaneAngle => "Plane Angle",
            Category::Pressure => "Pressure",
            Category::Speed => "Speed",
            Category::Temperature => "Temperature",
            Category::Time => "Time",
            Category::Volume => "Volume",
        }
    }

    /// Unit identifiers offered for this category. The first is the
    /// default selection.
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            Category::Currency => &[
                "PKR", "USD", "EUR", "GBP", "JPY", "BTC", "ETH", "XRP", "LTC", "DOGE", "SOL",
            ],
            Category::Length => &[
                "meter", "kilometer", "mile", "yard", "centimeter", "millimeter",
                "nautical_mile", "nanometer", "micrometer", "foot", "inch",
            ],
            Category::Area => &[
                "square meter", "square kilometer", "square mile", "square_yard",
                "square_foot", "square_inch", "hectare", "acre",
            ],
            Category::DataTransferRate => &[
                "bit/second", "kilobit/second", "megabit/second", "kibibit/second",
                "kilobyte/second", "megabyte/second", "gigabit/second", "gigabyte/second",
                "terabit/second", "terabyte/second", "tebibit/second", "tebibyte/second",
                "mebibit/second", "mebibyte/second",
            ],
            Category::DigitalStorage => &[
                "bit", "kilobit", "kibibit", "megabit", "mebibit", "gigabit", "gibibit",
                "terabit", "tebibit", "petabit", "pebibit", "byte", "kilobyte", "kibibyte",
                "megabyte", "mebibyte", "gigabyte", "gibibyte", "terabyte", "tebibyte",
                "petabyte", "pebibyte",
            ],
            Category::Energy => &[
                "joule", "kilojoule", "gram_calorie", "kilocalorie", "watt_hour",
                "kilowatt_hour", "electronvolt", "british_thermal_unit", "US_therm",
                "foot_pound",
            ],
            Category::Frequency => &["hertz", "kilohertz", "megahertz", "gigahertz"],
            Category::FuelEconomy => &[
                "kilometer/liter", "mile/us_gallon", "mile/gallon", "liter/100kilometer",
            ],
            Category::Mass => &[
                "gram", "kilogram", "pound", "ounce", "tonne", "us_ton", "stone",
                "milligram", "microgram", "imperial_ton", "metric_ton",
            ],
            Category::PlaneAngle => &[
                "degree", "radian", "gradian", "arcminute", "arcsecond", "milliradian",
            ],
            Category::Pressure => &["pascal", "bar", "psi", "standard_atmosphere", "torr"],
            Category::Speed => &[
                "meter/second", "kilometer/hour", "mile/hour", "foot/second", "mile/second", "knot",
            ],
            Category::Temperature => &["celsius", "fahrenheit", "kelvin"],
            Category::Time => &[
                "second", "millisecond", "microsecond", "nanosecond", "minute", "hour",
                "day", "week", "month", "year", "decade", "century",
            ],
            Category::Volume => &[
                "liter", "milliliter", "gallon", "us_liquid_gallon", "us_liquid_pint",
                "us_liquid_quart", "us_legal_cup", "us_fluid_ounce", "us_tablespoon",
                "us_teaspoon", "cubic meter", "imperial_gallon", "imperial_pint",
                "imperial_quart", "imperial_cup", "imperial_fluid_ounce",
                "imperial_tablespoon", "imperial_teaspoon", "cubic foot", "cubic inch",
                "cubic yard",
            ],
        }
    }

    pub fn is_currency(&self) -> bool {
        matches!(self, Category::Currency)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .iter()
            .find(|c| c.name() == s)
            .or_else(|| Category::ALL.iter().find(|c| c.name().eq_ignore_ascii_case(s)))
            .copied()
            .ok_or_else(|| ConvertError::UnknownCategory(s.to_string()))
    }
}

/// Category names in presentation order
pub fn list_categories() -> Vec<&'static str> {
    Category::ALL.iter().map(|c| c.name()).collect()
}

/// Unit identifiers for a category, in declared order
pub fn units_for(category: Category) -> &'static [&'static str] {
    category.units()
}

/// Check that every physical unit resolves and that each category's
/// units convert into one another. Currency codes must be upper-case
/// alphanumerics.
pub fn validate_registry() -> Result<(), ConvertError> {
    for category in Category::ALL {
        let units = category.units();

        if category.is_currency() {
            if let Some(bad) = units
                .iter()
                .find(|code| code.is_empty() || !code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()))
            {
                return Err(ConvertError::unsupported_currency(*bad));
            }
            continue;
        }

        let Some((first, rest)) = units.split_first() else {
            continue;
        };
        parse_unit(first)?;
        for unit in rest {
            if !compatible(first, unit)? {
                let from = parse_unit(first)?;
                let to = parse_unit(unit)?;
                return Err(ConvertError::IncompatibleUnits {
                    from: first.to_string(),
                    to: unit.to_string(),
                    from_dim: from.dimension.to_string(),
                    to_dim: to.dimension.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// One line of the static unit glossary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitDefinition {
    pub name: &'static str,
    pub description: &'static str,
}

const UNIT_DEFINITIONS: [UnitDefinition; 7] = [
    UnitDefinition { name: "Meter", description: "SI unit of length" },
    UnitDefinition { name: "Kilogram", description: "SI unit of mass" },
    UnitDefinition { name: "Joule", description: "SI unit of energy" },
    UnitDefinition { name: "Kelvin", description: "SI unit of temperature" },
    UnitDefinition { name: "Second", description: "SI unit of time" },
    UnitDefinition { name: "Pascal", description: "SI unit of pressure" },
    UnitDefinition { name: "Celsius", description: "SI unit of temperature" },
];

/// The glossary shown next to the history
pub fn unit_definitions() -> &'static [UnitDefinition] {
    &UNIT_DEFINITIONS
}

impl fmt::Display for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_is_valid() {
        validate_registry().unwrap();
    }

    #[test]
    fn test_category_order() {
        let names = list_categories();
        assert_eq!(names.len(), 15);
        assert_eq!(names[0], "Currency");
        assert_eq!(names[3], "Data Transfer Rate");
        assert_eq!(names[14], "Volume");
    }

    #[test]
    fn test_declared_unit_order() {
        const DECLARED: [(&str, &str); 15] = [
            ("Currency", "PKR, USD, EUR, GBP, JPY, BTC, ETH, XRP, LTC, DOGE, SOL"),
            ("Length", "meter, kilometer, mile, yard, centimeter, millimeter, nautical_mile, nanometer, micrometer, foot, inch"),
            ("Area", "square meter, square kilometer, square mile, square_yard, square_foot, square_inch, hectare, acre"),
            ("Data Transfer Rate", "bit/second, kilobit/second, megabit/second, kibibit/second, kilobyte/second, megabyte/second, gigabit/second, gigabyte/second, terabit/second, terabyte/second, tebibit/second, tebibyte/second, mebibit/second, mebibyte/second"),
            ("Digital Storage", "bit, kilobit, kibibit, megabit, mebibit, gigabit, gibibit, terabit, tebibit, petabit, pebibit, byte, kilobyte, kibibyte, megabyte, mebibyte, gigabyte, gibibyte, terabyte, tebibyte, petabyte, pebibyte"),
            ("Energy", "joule, kilojoule, gram_calorie, kilocalorie, watt_hour, kilowatt_hour, electronvolt, british_thermal_unit, US_therm, foot_pound"),
            ("Frequency", "hertz, kilohertz, megahertz, gigahertz"),
            ("Fuel Economy", "kilometer/liter, mile/us_gallon, mile/gallon, liter/100kilometer"),
            ("Mass", "gram, kilogram, pound, ounce, tonne, us_ton, stone, milligram, microgram, imperial_ton, metric_ton"),
            ("Plane Angle", "degree, radian, gradian, arcminute, arcsecond, milliradian"),
            ("Pressure", "pascal, bar, psi, standard_atmosphere, torr"),
            ("Speed", "meter/second, kilometer/hour, mile/hour, foot/second, mile/second, knot"),
            ("Temperature", "celsius, fahrenheit, kelvin"),
            ("Time", "second, millisecond, microsecond, nanosecond, minute, hour, day, week, month, year, decade, century"),
            ("Volume", "liter, milliliter, gallon, us_liquid_gallon, us_liquid_pint, us_liquid_quart, us_legal_cup, us_fluid_ounce, us_tablespoon, us_teaspoon, cubic meter, imperial_gallon, imperial_pint, imperial_quart, imperial_cup, imperial_fluid_ounce, imperial_tablespoon, imperial_teaspoon, cubic foot, cubic inch, cubic yard"),
        ];

        for (name, units) in DECLARED {
            let category: Category = name.parse().unwrap();
            let expected: Vec<&str> = units.split(", ").collect();
            assert_eq!(units_for(category).to_vec(), expected, "{}", name);
        }
        let named: HashSet<&str> = DECLARED.iter().map(|(name, _)| *name).collect();
        assert_eq!(named.len(), Category::ALL.len());
    }

    #[test]
    fn test_no_duplicate_units() {
        for category in Category::ALL {
            let units = category.units();
            let unique: HashSet<_> = units.iter().collect();
            assert_eq!(unique.len(), units.len(), "{}", category);
        }
        assert_eq!(units_for(Category::Currency).len(), 11);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Plane Angle".parse::<Category>().unwrap(), Category::PlaneAngle);
        assert_eq!("fuel economy".parse::<Category>().unwrap(), Category::FuelEconomy);
        assert_eq!(
            "Luminosity".parse::<Category>(),
            Err(ConvertError::UnknownCategory("Luminosity".to_string()))
        );
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unit_definitions() {
        let defs = unit_definitions();
        assert_eq!(defs.len(), 7);
        assert_eq!(defs[0].to_string(), "Meter: SI unit of length");
        assert_eq!(defs[6].name, "Celsius");
    }
}
