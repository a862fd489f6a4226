//! Unit definitions organized by category
//!
//! Names follow the long-form identifiers the category registry uses
//! ("nautical_mile", "us_liquid_quart", "british_thermal_unit", ...), with
//! short symbols registered as the canonical keys.

use std::collections::HashMap;
use std::sync::LazyLock;
use gauge_core::Number;
use crate::{Unit, Dimension};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

const PI: &str = "3.14159265358979323846264338327950288419716939937510";

fn lit(s: &str) -> Number {
    Number::from_str(s).expect("unit table literal")
}

/// Registry of all known units
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by symbol or alias
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        if let Some(unit) = self.units.get(symbol) {
            return Some(unit);
        }
        self.aliases.get(symbol).and_then(|canonical| self.units.get(canonical))
    }

    /// Number of canonical units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn register(&mut self, unit: Unit) {
        self.units.insert(unit.symbol.clone(), unit);
    }

    fn alias(&mut self, symbol: &str, aliases: &[&str]) {
        for alias in aliases {
            self.aliases.insert(alias.to_string(), symbol.to_string());
        }
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_mass_units();
        self.register_time_units();
        self.register_temperature_units();
        self.register_area_units();
        self.register_volume_units();
        self.register_velocity_units();
        self.register_energy_units();
        self.register_pressure_units();
        self.register_frequency_units();
        self.register_data_units();
        self.register_angle_units();
        self.register_fuel_economy_units();
    }

    fn register_length_units(&mut self) {
        let l = Dimension::LENGTH;
        self.register(Unit::new("m", "meter", l, Number::from_i64(1), "length"));
        self.register(Unit::new("km", "kilometer", l, Number::from_i64(1000), "length"));
        self.register(Unit::new("cm", "centimeter", l, lit("0.01"), "length"));
        self.register(Unit::new("mm", "millimeter", l, lit("0.001"), "length"));
        self.register(Unit::new("um", "micrometer", l, lit("0.000001"), "length"));
        self.register(Unit::new("nm", "nanometer", l, lit("0.000000001"), "length"));

        self.register(Unit::new("in", "inch", l, lit("0.0254"), "length"));
        self.register(Unit::new("ft", "foot", l, lit("0.3048"), "length"));
        self.register(Unit::new("yd", "yard", l, lit("0.9144"), "length"));
        self.register(Unit::new("mi", "mile", l, lit("1609.344"), "length"));
        self.register(Unit::new("nmi", "nautical mile", l, Number::from_i64(1852), "length"));

        self.alias("m", &["meter", "meters", "metre", "metres"]);
        self.alias("km", &["kilometer", "kilometers", "kilometre", "kilometres"]);
        self.alias("cm", &["centimeter", "centimeters", "centimetre"]);
        self.alias("mm", &["millimeter", "millimeters", "millimetre"]);
        self.alias("um", &["micrometer", "micrometers", "micron", "μm"]);
        self.alias("nm", &["nanometer", "nanometers"]);
        self.alias("in", &["inch", "inches"]);
        self.alias("ft", &["foot", "feet"]);
        self.alias("yd", &["yard", "yards"]);
        self.alias("mi", &["mile", "miles"]);
        self.alias("nmi", &["nautical_mile", "nautical mile", "nautical_miles"]);
    }

    fn register_mass_units(&mut self) {
        let m = Dimension::MASS;
        self.register(Unit::new("kg", "kilogram", m, Number::from_i64(1), "mass"));
        self.register(Unit::new("g", "gram", m, lit("0.001"), "mass"));
        self.register(Unit::new("mg", "milligram", m, lit("0.000001"), "mass"));
        self.register(Unit::new("ug", "microgram", m, lit("0.000000001"), "mass"));
        self.register(Unit::new("t", "tonne", m, Number::from_i64(1000), "mass"));

        self.register(Unit::new("lb", "pound", m, lit("0.45359237"), "mass"));
        self.register(Unit::new("oz", "ounce", m, lit("0.028349523125"), "mass"));
        self.register(Unit::new("st", "stone", m, lit("6.35029318"), "mass"));
        self.register(Unit::new("ton", "short ton", m, lit("907.18474"), "mass"));
        self.register(Unit::new("lton", "long ton", m, lit("1016.0469088"), "mass"));

        self.alias("kg", &["kilogram", "kilograms"]);
        self.alias("g", &["gram", "grams"]);
        self.alias("mg", &["milligram", "milligrams"]);
        self.alias("ug", &["microgram", "micrograms", "μg", "mcg"]);
        self.alias("t", &["tonne", "tonnes", "metric_ton", "metric ton"]);
        self.alias("lb", &["pound", "pounds", "lbs"]);
        self.alias("oz", &["ounce", "ounces"]);
        self.alias("st", &["stone", "stones"]);
        self.alias("ton", &["us_ton", "short_ton"]);
        self.alias("lton", &["imperial_ton", "long_ton"]);
    }

    fn register_time_units(&mut self) {
        let t = Dimension::TIME;
        self.register(Unit::new("s", "second", t, Number::from_i64(1), "time"));
        self.register(Unit::new("ms", "millisecond", t, lit("0.001"), "time"));
        self.register(Unit::new("us", "microsecond", t, lit("0.000001"), "time"));
        self.register(Unit::new("ns", "nanosecond", t, lit("0.000000001"), "time"));
        self.register(Unit::new("min", "minute", t, Number::from_i64(60), "time"));
        self.register(Unit::new("h", "hour", t, Number::from_i64(3600), "time"));
        self.register(Unit::new("d", "day", t, Number::from_i64(86400), "time"));
        self.register(Unit::new("wk", "week", t, Number::from_i64(604800), "time"));

        // Julian year of 365.25 days; a month is a twelfth of it
        self.register(Unit::new("yr", "year", t, Number::from_i64(31_557_600), "time"));
        self.register(Unit::new("mo", "month", t, Number::from_i64(2_629_800), "time"));
        self.register(Unit::new("decade", "decade", t, Number::from_i64(315_576_000), "time"));
        self.register(Unit::new("century", "century", t, Number::from_i64(3_155_760_000), "time"));

        self.alias("s", &["second", "seconds", "sec"]);
        self.alias("ms", &["millisecond", "milliseconds"]);
        self.alias("us", &["microsecond", "microseconds", "μs"]);
        self.alias("ns", &["nanosecond", "nanoseconds"]);
        self.alias("min", &["minute", "minutes"]);
        self.alias("h", &["hour", "hours", "hr"]);
        self.alias("d", &["day", "days"]);
        self.alias("wk", &["week", "weeks"]);
        self.alias("mo", &["month", "months"]);
        self.alias("yr", &["year", "years"]);
        self.alias("decade", &["decades"]);
        self.alias("century", &["centuries"]);
    }

    fn register_temperature_units(&mut self) {
        let th = Dimension::TEMPERATURE;
        // Kelvin is the SI base unit
        self.register(Unit::new("K", "kelvin", th, Number::from_i64(1), "temperature"));

        // K = C + 273.15
        self.register(Unit::with_offset(
            "degC", "celsius", th,
            Number::from_i64(1),
            lit("273.15"),
            "temperature",
        ));

        // K = (F + 459.67) * 5/9
        self.register(Unit::with_offset(
            "degF", "fahrenheit", th,
            Number::from_ratio(5, 9),
            Number::from_ratio(229_835, 900),
            "temperature",
        ));

        self.alias("K", &["kelvin", "kelvins"]);
        self.alias("degC", &["celsius", "degree_Celsius", "C", "°C"]);
        self.alias("degF", &["fahrenheit", "degree_Fahrenheit", "F", "°F"]);
    }

    fn register_area_units(&mut self) {
        let a = Dimension::AREA;
        self.register(Unit::new("m2", "square meter", a, Number::from_i64(1), "area"));
        self.register(Unit::new("km2", "square kilometer", a, Number::from_i64(1_000_000), "area"));
        self.register(Unit::new("ha", "hectare", a, Number::from_i64(10000), "area"));
        self.register(Unit::new("ac", "acre", a, lit("4046.8564224"), "area"));
        self.register(Unit::new("ft2", "square foot", a, lit("0.09290304"), "area"));
        self.register(Unit::new("in2", "square inch", a, lit("0.00064516"), "area"));
        self.register(Unit::new("mi2", "square mile", a, lit("2589988.110336"), "area"));
        self.register(Unit::new("yd2", "square yard", a, lit("0.83612736"), "area"));

        self.alias("m2", &["m²", "sqm"]);
        self.alias("km2", &["km²"]);
        self.alias("ft2", &["ft²", "sqft"]);
        self.alias("in2", &["in²"]);
        self.alias("mi2", &["mi²"]);
        self.alias("yd2", &["yd²"]);
        self.alias("ha", &["hectare", "hectares"]);
        self.alias("ac", &["acre", "acres"]);
    }

    fn register_volume_units(&mut self) {
        let v = Dimension::VOLUME;
        self.register(Unit::new("m3", "cubic meter", v, Number::from_i64(1), "volume"));
        self.register(Unit::new("L", "liter", v, lit("0.001"), "volume"));
        self.register(Unit::new("mL", "milliliter", v, lit("0.000001"), "volume"));

        // US liquid measures, all derived from the 231 in³ gallon
        let gallon = lit("0.003785411784");
        let fluid_ounce = gallon.mul(&Number::from_ratio(1, 128));
        self.register(Unit::new("gal", "US liquid gallon", v, gallon.clone(), "volume"));
        self.register(Unit::new("qt", "US liquid quart", v, gallon.mul(&Number::from_ratio(1, 4)), "volume"));
        self.register(Unit::new("pt", "US liquid pint", v, gallon.mul(&Number::from_ratio(1, 8)), "volume"));
        self.register(Unit::new("floz", "US fluid ounce", v, fluid_ounce.clone(), "volume"));
        self.register(Unit::new("tbsp", "US tablespoon", v, fluid_ounce.mul(&Number::from_ratio(1, 2)), "volume"));
        self.register(Unit::new("tsp", "US teaspoon", v, fluid_ounce.mul(&Number::from_ratio(1, 6)), "volume"));
        self.register(Unit::new("cup", "US legal cup", v, lit("0.00024"), "volume"));

        // Imperial measures, derived from the 4.54609 L gallon
        let imp_gallon = lit("0.00454609");
        let imp_pint = imp_gallon.mul(&Number::from_ratio(1, 8));
        let imp_fluid_ounce = imp_pint.mul(&Number::from_ratio(1, 20));
        let imp_tablespoon = imp_fluid_ounce.mul(&Number::from_ratio(5, 8));
        self.register(Unit::new("impgal", "imperial gallon", v, imp_gallon.clone(), "volume"));
        self.register(Unit::new("impqt", "imperial quart", v, imp_gallon.mul(&Number::from_ratio(1, 4)), "volume"));
        self.register(Unit::new("imppt", "imperial pint", v, imp_pint.clone(), "volume"));
        self.register(Unit::new("impcup", "imperial cup", v, imp_pint.mul(&Number::from_ratio(1, 2)), "volume"));
        self.register(Unit::new("impfloz", "imperial fluid ounce", v, imp_fluid_ounce.clone(), "volume"));
        self.register(Unit::new("imptbsp", "imperial tablespoon", v, imp_tablespoon.clone(), "volume"));
        self.register(Unit::new("imptsp", "imperial teaspoon", v, imp_tablespoon.mul(&Number::from_ratio(1, 3)), "volume"));

        self.alias("m3", &["m³"]);
        self.alias("L", &["liter", "liters", "litre", "litres", "l"]);
        self.alias("mL", &["milliliter", "milliliters", "millilitre", "ml"]);
        self.alias("gal", &["gallon", "gallons", "us_liquid_gallon", "us_gallon"]);
        self.alias("qt", &["quart", "us_liquid_quart"]);
        self.alias("pt", &["pint", "us_liquid_pint"]);
        self.alias("floz", &["fluid_ounce", "us_fluid_ounce"]);
        self.alias("tbsp", &["tablespoon", "us_tablespoon"]);
        self.alias("tsp", &["teaspoon", "us_teaspoon"]);
        self.alias("cup", &["us_legal_cup"]);
        self.alias("impgal", &["imperial_gallon"]);
        self.alias("impqt", &["imperial_quart"]);
        self.alias("imppt", &["imperial_pint"]);
        self.alias("impcup", &["imperial_cup"]);
        self.alias("impfloz", &["imperial_fluid_ounce"]);
        self.alias("imptbsp", &["imperial_tablespoon"]);
        self.alias("imptsp", &["imperial_teaspoon"]);
    }

    fn register_velocity_units(&mut self) {
        let v = Dimension::VELOCITY;
        self.register(Unit::new("km/h", "kilometer per hour", v, Number::from_ratio(5, 18), "velocity"));
        self.register(Unit::new("mph", "mile per hour", v, lit("0.44704"), "velocity"));
        self.register(Unit::new("kn", "knot", v, Number::from_ratio(463, 900), "velocity"));

        self.alias("km/h", &["kph", "kmh"]);
        self.alias("kn", &["knot", "knots"]);
    }

    fn register_energy_units(&mut self) {
        let e = Dimension::ENERGY;
        self.register(Unit::new("J", "joule", e, Number::from_i64(1), "energy"));
        self.register(Unit::new("kJ", "kilojoule", e, Number::from_i64(1000), "energy"));
        self.register(Unit::new("cal", "gram calorie", e, lit("4.184"), "energy"));
        self.register(Unit::new("kcal", "kilocalorie", e, Number::from_i64(4184), "energy"));
        self.register(Unit::new("Wh", "watt-hour", e, Number::from_i64(3600), "energy"));
        self.register(Unit::new("kWh", "kilowatt-hour", e, Number::from_i64(3_600_000), "energy"));
        self.register(Unit::new("eV", "electronvolt", e, lit("1602176634e-28"), "energy"));
        self.register(Unit::new("BTU", "British thermal unit", e, lit("1055.056"), "energy"));
        self.register(Unit::new("thm", "US therm", e, Number::from_i64(105_480_400), "energy"));
        self.register(Unit::new("ftlb", "foot-pound", e, lit("1.3558179483314004"), "energy"));

        self.alias("J", &["joule", "joules"]);
        self.alias("kJ", &["kilojoule", "kilojoules"]);
        self.alias("cal", &["gram_calorie", "calorie", "calories"]);
        self.alias("kcal", &["kilocalorie", "kilocalories", "Cal"]);
        self.alias("Wh", &["watt_hour"]);
        self.alias("kWh", &["kilowatt_hour"]);
        self.alias("eV", &["electronvolt", "electron_volt"]);
        self.alias("BTU", &["british_thermal_unit", "Btu"]);
        self.alias("thm", &["US_therm", "therm"]);
        self.alias("ftlb", &["foot_pound"]);
    }

    fn register_pressure_units(&mut self) {
        let p = Dimension::PRESSURE;
        self.register(Unit::new("Pa", "pascal", p, Number::from_i64(1), "pressure"));
        self.register(Unit::new("kPa", "kilopascal", p, Number::from_i64(1000), "pressure"));
        self.register(Unit::new("bar", "bar", p, Number::from_i64(100000), "pressure"));
        self.register(Unit::new("atm", "standard atmosphere", p, Number::from_i64(101325), "pressure"));
        self.register(Unit::new("psi", "pound-force per square inch", p, lit("6894.757293168361"), "pressure"));
        self.register(Unit::new("torr", "torr", p, Number::from_ratio(101325, 760), "pressure"));

        self.alias("Pa", &["pascal", "pascals"]);
        self.alias("kPa", &["kilopascal"]);
        self.alias("atm", &["standard_atmosphere", "atmosphere"]);
        self.alias("psi", &["pound_force_per_square_inch"]);
    }

    fn register_frequency_units(&mut self) {
        let f = Dimension::FREQUENCY;
        self.register(Unit::new("Hz", "hertz", f, Number::from_i64(1), "frequency"));
        self.register(Unit::new("kHz", "kilohertz", f, Number::from_i64(1000), "frequency"));
        self.register(Unit::new("MHz", "megahertz", f, Number::from_i64(1_000_000), "frequency"));
        self.register(Unit::new("GHz", "gigahertz", f, Number::from_i64(1_000_000_000), "frequency"));

        self.alias("Hz", &["hertz"]);
        self.alias("kHz", &["kilohertz"]);
        self.alias("MHz", &["megahertz"]);
        self.alias("GHz", &["gigahertz"]);
    }

    fn register_data_units(&mut self) {
        let b = Dimension::INFORMATION;

        // (symbol, name, bits) for decimal and binary prefixes on bit and byte
        let prefixed: [(&str, &str, i64); 22] = [
            ("bit", "bit", 1),
            ("kbit", "kilobit", 1_000),
            ("Mbit", "megabit", 1_000_000),
            ("Gbit", "gigabit", 1_000_000_000),
            ("Tbit", "terabit", 1_000_000_000_000),
            ("Pbit", "petabit", 1_000_000_000_000_000),
            ("Kibit", "kibibit", 1 << 10),
            ("Mibit", "mebibit", 1 << 20),
            ("Gibit", "gibibit", 1 << 30),
            ("Tibit", "tebibit", 1 << 40),
            ("Pibit", "pebibit", 1 << 50),
            ("B", "byte", 8),
            ("kB", "kilobyte", 8_000),
            ("MB", "megabyte", 8_000_000),
            ("GB", "gigabyte", 8_000_000_000),
            ("TB", "terabyte", 8_000_000_000_000),
            ("PB", "petabyte", 8_000_000_000_000_000),
            ("KiB", "kibibyte", 8 << 10),
            ("MiB", "mebibyte", 8 << 20),
            ("GiB", "gibibyte", 8 << 30),
            ("TiB", "tebibyte", 8 << 40),
            ("PiB", "pebibyte", 8 << 50),
        ];

        for (symbol, name, bits) in prefixed {
            self.register(Unit::new(symbol, name, b, Number::from_i64(bits), "data"));
            let plural = format!("{}s", name);
            self.alias(symbol, &[name, plural.as_str()]);
        }

        let r = Dimension::DATA_RATE;
        self.register(Unit::new("bps", "bit per second", r, Number::from_i64(1), "data rate"));
        self.register(Unit::new("kbps", "kilobit per second", r, Number::from_i64(1000), "data rate"));
        self.register(Unit::new("Mbps", "megabit per second", r, Number::from_i64(1_000_000), "data rate"));
        self.register(Unit::new("Gbps", "gigabit per second", r, Number::from_i64(1_000_000_000), "data rate"));
    }

    fn register_angle_units(&mut self) {
        // Angles are dimensionless
        let d = Dimension::DIMENSIONLESS;
        let pi = lit(PI);
        self.register(Unit::new("rad", "radian", d, Number::from_i64(1), "angle"));
        self.register(Unit::new("mrad", "milliradian", d, lit("0.001"), "angle"));
        self.register(Unit::new("deg", "degree", d, pi.mul(&Number::from_ratio(1, 180)), "angle"));
        self.register(Unit::new("grad", "gradian", d, pi.mul(&Number::from_ratio(1, 200)), "angle"));
        self.register(Unit::new("arcmin", "arcminute", d, pi.mul(&Number::from_ratio(1, 10_800)), "angle"));
        self.register(Unit::new("arcsec", "arcsecond", d, pi.mul(&Number::from_ratio(1, 648_000)), "angle"));

        self.alias("rad", &["radian", "radians"]);
        self.alias("mrad", &["milliradian", "milliradians"]);
        self.alias("deg", &["degree", "degrees", "°"]);
        self.alias("grad", &["gradian", "gradians", "gon"]);
        self.alias("arcmin", &["arcminute", "arc_minute", "minute_of_arc"]);
        self.alias("arcsec", &["arcsecond", "arc_second", "second_of_arc"]);
    }

    fn register_fuel_economy_units(&mut self) {
        // Distance per volume, plus the reciprocal volume per distance
        let per_volume = Dimension::FUEL_ECONOMY;
        self.register(Unit::new("km/L", "kilometer per liter", per_volume,
            Number::from_i64(1_000_000), "fuel economy"));
        // 1609.344 m / 0.003785411784 m³
        self.register(Unit::new("mpg", "mile per US gallon", per_volume,
            Number::from_ratio(1_609_344_000_000_000, 3_785_411_784), "fuel economy"));
        // volume per distance is an area
        self.register(Unit::new("L/100km", "liter per 100 kilometer", Dimension::AREA,
            lit("0.00000001"), "fuel economy"));

        self.alias("km/L", &["kilometer/liter", "kmpl"]);
        self.alias("mpg", &["mile/us_gallon", "mile/gallon"]);
        self.alias("L/100km", &["liter/100kilometer"]);
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
