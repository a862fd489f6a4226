//! Gauge Core - Fundamental types
//!
//! This crate provides the core types used throughout Gauge:
//! - `Number`: Arbitrary precision decimal numbers
//! - `ConvertError`: Typed conversion errors with machine-readable codes

mod number;
mod error;

pub use number::{Number, NumberError};
pub use error::{ConvertError, ErrorReport, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, NumberError, ConvertError, ErrorReport};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod number_tests {
        use super::*;

        #[test]
        fn test_from_i64() {
            let n = Number::from_i64(42);
            assert_eq!(n.to_f64(), Some(42.0));
            assert_eq!(n.to_string(), "42");
        }

        #[test]
        fn test_from_str_decimal() {
            let n = Number::from_str("3.14").unwrap();
            assert_eq!(n.to_f64(), Some(3.14));
            assert_eq!(Number::from_str(" -2.5E3 ").unwrap(), Number::from_i64(-2500));
        }

        #[test]
        fn test_from_str_fraction() {
            let n = Number::from_str("1/4").unwrap();
            assert_eq!(n, Number::from_str("0.25").unwrap());
        }

        #[test]
        fn test_from_str_scientific_integer_mantissa() {
            let ev = Number::from_str("1602176634e-28").unwrap();
            let expected = Number::from_str("0.0000000000000000001602176634").unwrap();
            assert_eq!(ev, expected);
        }

        #[test]
        fn test_from_str_rejects_garbage() {
            assert!(matches!(Number::from_str("abc"), Err(NumberError::ParseError(_))));
            assert!(matches!(Number::from_str("1/2/3"), Err(NumberError::ParseError(_))));
            assert_eq!(Number::from_str("1/0"), Err(NumberError::DivisionByZero));
        }

        #[test]
        fn test_from_f64_keeps_short_form() {
            let n = Number::from_f64(0.0000231).unwrap();
            assert_eq!(n, Number::from_str("0.0000231").unwrap());
            assert_eq!(Number::from_f64(f64::NAN), Err(NumberError::NotFinite));
        }

        #[test]
        fn test_affine_addition_is_exact() {
            let c = Number::from_i64(25);
            let k = c.add(&Number::from_str("273.15").unwrap());
            assert_eq!(k, Number::from_str("298.15").unwrap());
        }

        #[test]
        fn test_checked_div() {
            let a = Number::from_i64(1000);
            let b = Number::from_i64(1000);
            assert_eq!(a.checked_div(&b).unwrap(), Number::from_i64(1));
            assert_eq!(a.checked_div(&Number::from_i64(0)), Err(NumberError::DivisionByZero));
        }

        #[test]
        fn test_pow() {
            let n = Number::from_str("0.3048").unwrap();
            assert_eq!(n.pow(2), Number::from_str("0.09290304").unwrap());
            assert_eq!(Number::from_i64(10).pow(-2), Number::from_str("0.01").unwrap());
        }

        #[test]
        fn test_as_trimmed() {
            assert_eq!(Number::from_i64(1000).as_trimmed(10), "1000");
            assert_eq!(Number::from_str("1.5").unwrap().as_trimmed(10), "1.5");
            assert_eq!(Number::from_ratio(1, 3).as_trimmed(4), "0.3333");
            assert_eq!(Number::from_i64(0).as_trimmed(10), "0");
            assert_eq!(Number::from_str("1602176634e-28").unwrap().as_trimmed(10), "1.602176634e-19");
        }

        #[test]
        fn test_pow_by_squaring() {
            assert_eq!(Number::from_i64(2).pow(10), Number::from_i64(1024));
            assert_eq!(Number::from_i64(0).pow(-1), Number::from_i64(0));
        }

        #[test]
        fn test_serde_keeps_digits() {
            let third = Number::from_ratio(1, 3);
            let json = serde_json::to_string(&third).unwrap();
            let back: Number = serde_json::from_str(&json).unwrap();
            assert_eq!(back, third);
        }

        #[test]
        fn test_out_of_range_renders_scientific() {
            let huge = Number::from_str("15e299999999").unwrap();
            assert_eq!(huge.to_f64(), None);
            assert_eq!(huge.as_trimmed(10), "1.5e300000000");
            assert_eq!(huge.to_string(), "1.5e300000000");

            let tiny = Number::from_str("-25e-400").unwrap();
            assert_eq!(tiny.to_f64(), None);
            assert_eq!(tiny.as_trimmed(10), "-2.5e-399");

            let json = serde_json::to_string(&huge).unwrap();
            assert_eq!(json, "\"1.5e300000000\"");
            let back: Number = serde_json::from_str(&json).unwrap();
            assert_eq!(back, huge);
        }

        #[test]
        fn test_ordering() {
            assert!(Number::from_i64(1) < Number::from_i64(2));
            assert!(Number::from_i64(-1).is_negative());
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_codes() {
            assert_eq!(ConvertError::unsupported_currency("XYZ").code(), codes::UNSUPPORTED_CURRENCY);
            assert_eq!(ConvertError::network("timeout").code(), codes::NETWORK_FAILURE);
            assert_eq!(ConvertError::UnknownUnit("parsec".into()).code(), codes::UNKNOWN_UNIT);
            assert_eq!(ConvertError::from(NumberError::DivisionByZero).code(), codes::NUMERIC_ERROR);
        }

        #[test]
        fn test_display() {
            let e = ConvertError::unsupported_currency("XYZ");
            assert_eq!(e.to_string(), "Currency not supported: XYZ");

            let e = ConvertError::IncompatibleUnits {
                from: "m".into(),
                to: "kg".into(),
                from_dim: "L".into(),
                to_dim: "M".into(),
            };
            assert!(e.to_string().contains("incompatible dimensions"));
        }

        #[test]
        fn test_report_serialization() {
            let report = ConvertError::network("connection refused").report();
            let json = report.to_json();
            assert_eq!(json["code"], "NETWORK_FAILURE");
            assert!(json["message"].as_str().unwrap().contains("connection refused"));
            assert!(json.get("suggestion").is_some());

            let report = ConvertError::from(NumberError::DivisionByZero).report();
            assert!(report.to_json().get("suggestion").is_none());
            assert!(report.to_string().starts_with("[NUMERIC_ERROR]"));
        }
    }
}
