//! Gauge Currency - live exchange-rate conversion
//!
//! Rates come from `https://api.exchangerate-api.com/v4/latest/{BASE}`,
//! fetched once per conversion through a [`RateSource`].

mod rates;
mod source;
mod converter;

pub use rates::{RateTable, parse_rate_table};
pub use source::{RateSource, HttpRateSource, RATE_API_URL};
pub use converter::CurrencyConverter;
