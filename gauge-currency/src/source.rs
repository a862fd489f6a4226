//! Where rate tables come from

use reqwest::blocking::Client;
use tracing::{debug, warn};
use gauge_core::ConvertError;
use crate::rates::{parse_rate_table, RateTable};

/// Fixed endpoint of the public exchange-rate service
pub const RATE_API_URL: &str = "https://api.exchangerate-api.com/v4/latest";

/// A provider of rate tables keyed by base currency
pub trait RateSource {
    /// Fetch the table of rates from `base` to every other code
    fn fetch(&self, base: &str) -> Result<RateTable, ConvertError>;
}

impl<T: RateSource + ?Sized> RateSource for Box<T> {
    fn fetch(&self, base: &str) -> Result<RateTable, ConvertError> {
        (**self).fetch(base)
    }
}

/// Blocking HTTP source backed by `reqwest`.
///
/// One GET per call. No retry, no cache, and the client's default timeouts.
pub struct HttpRateSource {
    client: Client,
    base_url: String,
}

impl HttpRateSource {
    pub fn new() -> Result<Self, ConvertError> {
        Self::with_base_url(RATE_API_URL)
    }

    fn with_base_url(base_url: &str) -> Result<Self, ConvertError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ConvertError::network(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl RateSource for HttpRateSource {
    fn fetch(&self, base: &str) -> Result<RateTable, ConvertError> {
        let url = format!("{}/{}", self.base_url, base);
        debug!(%url, "fetching exchange rates");

        let response = self.client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!(%url, error = %e, "exchange rate request failed");
                ConvertError::network(e)
            })?;

        let body = response.text().map_err(|e| {
            warn!(%url, error = %e, "failed to read exchange rate body");
            ConvertError::network(e)
        })?;

        let table = parse_rate_table(&body)?;
        debug!(base = %table.base, date = ?table.date, rates = table.len(), "exchange rates loaded");
        Ok(table)
    }
}
