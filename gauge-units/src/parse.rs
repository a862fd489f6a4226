//! Unit string parsing - parse expressions like "kilometer/hour" or "square meter"

use gauge_core::{ConvertError, Number};
use crate::Unit;
use crate::units::UNITS;

/// Largest exponent accepted after `^`
const MAX_EXPONENT: i32 = 9;

/// Parse a unit string into a Unit
///
/// Supported formats:
/// - Simple: "m", "kilogram", "nautical_mile"
/// - Powers: "m^2", "s^-1", "m²"
/// - Area and volume words: "square meter", "cubic_foot"
/// - Products: "kg*m", "N m"
/// - Quotients: "meter/second", "kilobyte/second"
/// - Scaled: "100kilometer" (as in "liter/100kilometer")
pub fn parse_unit(s: &str) -> Result<Unit, ConvertError> {
    let s = s.trim();

    if s.is_empty() {
        return Err(ConvertError::UnknownUnit(String::new()));
    }

    if let Some(unit) = UNITS.get(s) {
        return Ok(unit.clone());
    }

    parse_unit_expression(s)
}

/// Parse a compound expression with at most one '/'
fn parse_unit_expression(s: &str) -> Result<Unit, ConvertError> {
    let (numerator, denominator) = match s.split_once('/') {
        Some((n, d)) => (n, Some(d)),
        None => (s, None),
    };

    let numerator = parse_product(numerator, s)?;

    match denominator {
        None => Ok(numerator),
        Some(d) if d.contains('/') => Err(unknown(s)),
        Some(d) => match numerator.divide(&parse_product(d, s)?) {
            Err(ConvertError::UnknownUnit(_)) => Err(unknown(s)),
            other => other,
        },
    }
}

/// Parse a product of factors like "kg*m" or "square mile"
fn parse_product(s: &str, whole: &str) -> Result<Unit, ConvertError> {
    let mut factors = s
        .split(|c| c == '*' || c == '·' || c == ' ')
        .filter(|p| !p.is_empty());

    let mut result: Option<Unit> = None;
    while let Some(token) = factors.next() {
        let unit = match token {
            // "square meter": the word applies to the next factor
            "square" | "cubic" => {
                let base = factors
                    .next()
                    .ok_or_else(|| unknown(whole))?;
                let exp = if token == "square" { 2 } else { 3 };
                parse_power(base, whole)?
                    .power(exp)
                    .map_err(|_| unknown(whole))?
            }
            _ => parse_power(token, whole)?,
        };
        result = Some(match result {
            None => unit,
            Some(acc) => acc.multiply(&unit).map_err(|_| unknown(whole))?,
        });
    }

    result.ok_or_else(|| unknown(whole))
}

/// Parse a single factor with optional power like "m^2", "s⁻¹" or "square_foot"
fn parse_power(s: &str, whole: &str) -> Result<Unit, ConvertError> {
    let (base, exp) = if let Some(base) = s.strip_prefix("square_") {
        (base, 2)
    } else if let Some(base) = s.strip_prefix("cubic_") {
        (base, 3)
    } else if let Some((base, exp_str)) = s.split_once('^') {
        let exp: i32 = exp_str.parse().map_err(|_| unknown(whole))?;
        if !(-MAX_EXPONENT..=MAX_EXPONENT).contains(&exp) {
            return Err(unknown(whole));
        }
        (base, exp)
    } else if let Some((base, exp)) = parse_superscript(s) {
        (base, exp)
    } else {
        return lookup_scaled_unit(s, whole);
    };

    lookup_scaled_unit(base, whole)?
        .power(exp)
        .map_err(|_| unknown(whole))
}

/// Split superscript exponents like m², s⁻¹
fn parse_superscript(s: &str) -> Option<(&str, i32)> {
    const DIGITS: [(char, i32); 9] = [
        ('¹', 1), ('²', 2), ('³', 3), ('⁴', 4), ('⁵', 5),
        ('⁶', 6), ('⁷', 7), ('⁸', 8), ('⁹', 9),
    ];

    let last = s.chars().last()?;
    let (_, exp) = DIGITS.iter().find(|(c, _)| *c == last)?;
    let base = &s[..s.len() - last.len_utf8()];

    match base.strip_suffix('⁻') {
        Some(base) => Some((base, -exp)),
        None => Some((base, *exp)),
    }
}

/// Look up a unit, honouring a leading numeric multiplier ("100kilometer")
fn lookup_scaled_unit(s: &str, whole: &str) -> Result<Unit, ConvertError> {
    let split = s
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    if split == 0 {
        return lookup_base_unit(s, whole);
    }

    let (digits, rest) = s.split_at(split);
    if rest.is_empty() {
        return Err(unknown(whole));
    }

    let factor = Number::from_str(digits)
        .map_err(|_| unknown(whole))?;
    Ok(lookup_base_unit(rest, whole)?.scale(&factor, digits))
}

fn unknown(whole: &str) -> ConvertError {
    ConvertError::UnknownUnit(whole.to_string())
}

/// Look up a base unit by symbol or alias
fn lookup_base_unit(s: &str, whole: &str) -> Result<Unit, ConvertError> {
    UNITS.get(s)
        .cloned()
        .ok_or_else(|| unknown(whole))
}
