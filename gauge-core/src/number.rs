//! Decimal numbers for unit factors, offsets and exchange rates
//!
//! Backed by dashu-float's `DBig` at a fixed working precision, so factors
//! such as 0.3048 and offsets such as 273.15 are held exactly and ratio
//! conversions like 1000 m -> 1 km come out exact.

use std::cmp::Ordering;
use std::fmt;
use dashu_float::DBig;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Not a finite number")]
    NotFinite,
}

/// Significant decimal digits kept by every operation
const WORKING_DIGITS: usize = 50;

/// Orders of magnitude an f64 can hold, subnormals included
const MIN_MAGNITUDE: isize = -324;
const MAX_MAGNITUDE: isize = 308;

#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

fn at_working_precision(value: DBig) -> DBig {
    value.with_precision(WORKING_DIGITS).value()
}

/// Parse "12.5", "-3", "1602176634e-28" or "2.5E3"
fn parse_decimal(s: &str) -> Result<DBig, NumberError> {
    let invalid = || NumberError::ParseError(s.to_string());

    let (mantissa, exponent) = match s.find(|c| c == 'e' || c == 'E') {
        Some(at) => (&s[..at], s[at + 1..].parse::<isize>().map_err(|_| invalid())?),
        None => (s, 0),
    };

    let mantissa: DBig = mantissa.parse().map_err(|_| invalid())?;
    if exponent == 0 {
        Ok(mantissa)
    } else {
        Ok(mantissa * DBig::from_parts(IBig::ONE, exponent))
    }
}

impl Number {
    /// Parse a decimal, scientific ("1.5e10") or fractional ("1/3") literal
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();

        let inner = match s.split_once('/') {
            Some((num, den)) => {
                let num = at_working_precision(parse_decimal(num.trim())?);
                let den = at_working_precision(parse_decimal(den.trim())?);
                if den == DBig::ZERO {
                    return Err(NumberError::DivisionByZero);
                }
                num / den
            }
            None => at_working_precision(parse_decimal(s)?),
        };

        Ok(Self { inner })
    }

    pub fn from_i64(n: i64) -> Self {
        Self { inner: at_working_precision(DBig::from(n)) }
    }

    /// `num / den` rounded to working precision; a zero denominator gives zero
    pub fn from_ratio(num: i64, den: i64) -> Self {
        if den == 0 {
            return Self::from_i64(0);
        }
        Self::from_i64(num).checked_div(&Self::from_i64(den)).unwrap_or_else(|_| Self::from_i64(0))
    }

    /// Exact decimal of the float's shortest round-trip form
    /// (0.1 becomes 0.1, not 0.1000000000000000055...)
    pub fn from_f64(f: f64) -> Result<Self, NumberError> {
        if !f.is_finite() {
            return Err(NumberError::NotFinite);
        }
        Self::from_str(&f.to_string())
    }

    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }

    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        Ok(Self { inner: &self.inner / &other.inner })
    }

    pub fn recip(&self) -> Result<Self, NumberError> {
        Self::from_i64(1).checked_div(self)
    }

    /// Integer power by repeated squaring. A negative power of zero is zero.
    pub fn pow(&self, exp: i32) -> Self {
        let mut base = self.clone();
        let mut remaining = exp.unsigned_abs();
        let mut acc = Self::from_i64(1);

        while remaining > 0 {
            if remaining & 1 == 1 {
                acc = acc.mul(&base);
            }
            base = base.mul(&base);
            remaining >>= 1;
        }

        if exp < 0 {
            acc.recip().unwrap_or_else(|_| Self::from_i64(0))
        } else {
            acc
        }
    }

    /// Decimal order of magnitude, `floor(log10(|x|))`; `None` for zero
    fn magnitude(&self) -> Option<isize> {
        if self.is_zero() {
            return None;
        }
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let digits = significand.to_string().trim_start_matches('-').len() as isize;
        Some(exponent + digits - 1)
    }

    /// Whether the plain decimal form stays short enough to print
    fn in_f64_range(&self) -> bool {
        self.magnitude().map_or(true, |m| (MIN_MAGNITUDE..=MAX_MAGNITUDE).contains(&m))
    }

    /// Nearest f64, or `None` when out of range
    pub fn to_f64(&self) -> Option<f64> {
        if !self.in_f64_range() {
            return None;
        }
        self.inner
            .to_string()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
    }

    /// "1.5e300000000", built from the significand without expanding it
    fn to_scientific(&self) -> String {
        let (significand, exponent) = self.inner.clone().into_repr().into_parts();
        let text = significand.to_string();
        let (sign, digits) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.as_str()),
        };
        let order = exponent + digits.len() as isize - 1;
        let (lead, rest) = digits.split_at(1);
        match rest.trim_end_matches('0') {
            "" => format!("{sign}{lead}e{order}"),
            rest => format!("{sign}{lead}.{rest}e{order}"),
        }
    }

    /// Render with at most `places` decimals, trailing zeros removed.
    ///
    /// Non-zero magnitudes too small to show at that precision switch to
    /// scientific notation ("1.602176634e-19") instead of printing "0".
    /// So do values outside the f64 range.
    pub fn as_trimmed(&self, places: u32) -> String {
        let Some(f) = self.to_f64() else {
            return self.to_scientific();
        };

        let threshold = 10f64.powi(-(places as i32));
        if f != 0.0 && f.abs() < threshold {
            return format!("{:e}", f);
        }

        let fixed = format!("{:.*}", places as usize, f);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };

        match trimmed {
            "-0" => "0".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_trimmed(10))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(Ordering::Equal)
    }
}

// Numbers travel as strings so no digits are lost to f64
impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.in_f64_range() {
            serializer.collect_str(&self.inner)
        } else {
            serializer.serialize_str(&self.to_scientific())
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
