//! Rate table returned by the exchange-rate service

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use gauge_core::{ConvertError, Number};

/// Body of `GET /v4/latest/{BASE}`
///
/// Only `rates` is required; the service also sends `base` and `date`
/// which are kept for logging. A `null` rate only affects its own code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub date: Option<String>,
    pub rates: BTreeMap<String, Option<f64>>,
}

impl RateTable {
    /// Rate for converting one unit of `base` into `code`.
    ///
    /// Missing, `null` and zero rates all mean the code is unsupported.
    pub fn rate(&self, code: &str) -> Result<Number, ConvertError> {
        match self.rates.get(code).copied().flatten() {
            Some(rate) if rate != 0.0 => Ok(Number::from_f64(rate)?),
            _ => Err(ConvertError::unsupported_currency(code)),
        }
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Parse a response body, mapping malformed JSON to a network failure
pub fn parse_rate_table(body: &str) -> Result<RateTable, ConvertError> {
    serde_json::from_str(body)
        .map_err(|e| ConvertError::network(format!("malformed rate table: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "provider": "https://www.exchangerate-api.com",
        "base": "USD",
        "date": "2024-05-01",
        "time_last_updated": 1714521601,
        "rates": {"USD": 1, "EUR": 0.936, "PKR": 278.5, "BTC": 0.0000163}
    }"#;

    #[test]
    fn test_parse_sample() {
        let table = parse_rate_table(SAMPLE).unwrap();
        assert_eq!(table.base, "USD");
        assert_eq!(table.date.as_deref(), Some("2024-05-01"));
        assert_eq!(table.len(), 4);
        assert_eq!(table.rate("EUR").unwrap(), Number::from_str("0.936").unwrap());
        assert_eq!(table.rate("BTC").unwrap(), Number::from_str("0.0000163").unwrap());
    }

    #[test]
    fn test_missing_code() {
        let table = parse_rate_table(SAMPLE).unwrap();
        assert_eq!(table.rate("XYZ"), Err(ConvertError::unsupported_currency("XYZ")));
    }

    #[test]
    fn test_null_rate_is_unsupported() {
        let table = parse_rate_table(r#"{"rates": {"EUR": 0.9, "VEF": null, "XXX": 0}}"#).unwrap();
        assert_eq!(table.rate("EUR").unwrap(), Number::from_str("0.9").unwrap());
        assert_eq!(table.rate("VEF"), Err(ConvertError::unsupported_currency("VEF")));
        assert_eq!(table.rate("XXX"), Err(ConvertError::unsupported_currency("XXX")));
    }

    #[test]
    fn test_rates_only_body() {
        let table = parse_rate_table(r#"{"rates": {"GBP": 0.8}}"#).unwrap();
        assert!(table.base.is_empty());
        assert!(table.date.is_none());
    }

    #[test]
    fn test_malformed_body() {
        for body in ["", "not json", r#"{"base": "USD"}"#, r#"{"rates": {"EUR": "x"}}"#] {
            let err = parse_rate_table(body).unwrap_err();
            assert!(matches!(err, ConvertError::NetworkFailure(_)), "{}", body);
        }
    }
}
