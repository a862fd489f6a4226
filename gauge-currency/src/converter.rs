//! Amount conversion on top of a rate source

use tracing::info;
use gauge_core::{ConvertError, Number};
use crate::source::RateSource;

/// Converts amounts between currency codes using live rates
pub struct CurrencyConverter<S> {
    source: S,
}

impl<S: RateSource> CurrencyConverter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// `amount` of `source` expressed in `target`.
    ///
    /// Fetches the table for `source` on every call and multiplies by the
    /// `target` rate. Codes are trimmed and upper-cased first; anything
    /// other than ASCII letters and digits is unsupported without a request.
    pub fn convert(&self, source: &str, target: &str, amount: &Number) -> Result<Number, ConvertError> {
        let source = normalize_code(source)?;
        let target = normalize_code(target)?;

        let table = self.source.fetch(&source)?;
        let rate = table.rate(&target)?;
        info!(%source, %target, %rate, "currency rate applied");

        Ok(amount.mul(&rate))
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

fn normalize_code(code: &str) -> Result<String, ConvertError> {
    let code = code.trim().to_ascii_uppercase();
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConvertError::unsupported_currency(code));
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use crate::RateTable;

    /// In-memory source that remembers which bases were requested
    struct FixedRates {
        rates: BTreeMap<String, Option<f64>>,
        requested: RefCell<Vec<String>>,
    }

    impl FixedRates {
        fn new(pairs: &[(&str, f64)]) -> Self {
            Self {
                rates: pairs.iter().map(|(c, r)| (c.to_string(), Some(*r))).collect(),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl RateSource for FixedRates {
        fn fetch(&self, base: &str) -> Result<RateTable, ConvertError> {
            self.requested.borrow_mut().push(base.to_string());
            Ok(RateTable { base: base.to_string(), date: None, rates: self.rates.clone() })
        }
    }

    struct Offline;

    impl RateSource for Offline {
        fn fetch(&self, _base: &str) -> Result<RateTable, ConvertError> {
            Err(ConvertError::network("connection refused"))
        }
    }

    #[test]
    fn test_convert_multiplies_rate() {
        let converter = CurrencyConverter::new(FixedRates::new(&[("PKR", 278.5)]));
        let result = converter.convert("USD", "PKR", &Number::from_i64(2)).unwrap();
        assert_eq!(result, Number::from_i64(557));
    }

    #[test]
    fn test_codes_are_normalized() {
        let converter = CurrencyConverter::new(FixedRates::new(&[("EUR", 0.5)]));
        let result = converter.convert(" usd ", "eur", &Number::from_i64(10)).unwrap();
        assert_eq!(result, Number::from_i64(5));
        assert_eq!(converter.source().requested.borrow().as_slice(), ["USD"]);
    }

    #[test]
    fn test_unsupported_target() {
        let converter = CurrencyConverter::new(FixedRates::new(&[("EUR", 0.5)]));
        let err = converter.convert("USD", "XYZ", &Number::from_i64(1)).unwrap_err();
        assert_eq!(err, ConvertError::unsupported_currency("XYZ"));
    }

    #[test]
    fn test_empty_code_skips_fetch() {
        let converter = CurrencyConverter::new(FixedRates::new(&[]));
        assert!(converter.convert("", "EUR", &Number::from_i64(1)).is_err());
        assert!(converter.source().requested.borrow().is_empty());
    }

    #[test]
    fn test_code_with_path_characters_skips_fetch() {
        let converter = CurrencyConverter::new(FixedRates::new(&[("EUR", 0.5)]));
        for code in ["USD/../..", "usd?x=1", "US D", "USD#"] {
            let err = converter.convert(code, "EUR", &Number::from_i64(1)).unwrap_err();
            assert!(matches!(err, ConvertError::UnsupportedCurrency { .. }), "{}", code);
        }
        assert!(converter.convert("USD", "EUR/..", &Number::from_i64(1)).is_err());
        assert!(converter.source().requested.borrow().is_empty());
    }

    #[test]
    fn test_network_failure_propagates() {
        let converter = CurrencyConverter::new(Offline);
        let err = converter.convert("USD", "EUR", &Number::from_i64(1)).unwrap_err();
        assert!(matches!(err, ConvertError::NetworkFailure(_)));
    }
}
