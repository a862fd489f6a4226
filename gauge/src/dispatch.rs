//! Route a conversion to the currency or units converter

use tracing::debug;
use gauge_core::{ConvertError, Number};
use gauge_currency::{CurrencyConverter, RateSource};
use gauge_units::convert_units;
use crate::registry::Category;

/// One conversion as selected by the user
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub category: Category,
    pub from: String,
    pub to: String,
    pub value: Number,
}

impl ConversionRequest {
    /// Build a request, rejecting negative values
    pub fn new(
        category: Category,
        from: impl Into<String>,
        to: impl Into<String>,
        value: Number,
    ) -> Result<Self, ConvertError> {
        if value.is_negative() {
            return Err(ConvertError::InvalidValue(format!("{} is below zero", value)));
        }
        Ok(Self { category, from: from.into(), to: to.into(), value })
    }

    /// Build a request from a float input, rejecting NaN and infinities too
    pub fn from_f64(
        category: Category,
        from: impl Into<String>,
        to: impl Into<String>,
        value: f64,
    ) -> Result<Self, ConvertError> {
        if !value.is_finite() {
            return Err(ConvertError::InvalidValue(format!("{} is not a finite number", value)));
        }
        Self::new(category, from, to, Number::from_f64(value)?)
    }
}

/// Sends currency requests to the rate service and everything else to the
/// units engine. Unit membership in the category is not checked here;
/// mismatches surface as converter errors.
pub struct Dispatcher<S> {
    currency: CurrencyConverter<S>,
}

impl<S: RateSource> Dispatcher<S> {
    pub fn new(source: S) -> Self {
        Self { currency: CurrencyConverter::new(source) }
    }

    pub fn convert(&self, category: Category, from: &str, to: &str, value: &Number) -> Result<Number, ConvertError> {
        debug!(%category, from, to, %value, "dispatching conversion");
        if category.is_currency() {
            self.currency.convert(from, to, value)
        } else {
            convert_units(value, from, to)
        }
    }

    pub fn dispatch(&self, request: &ConversionRequest) -> Result<Number, ConvertError> {
        self.convert(request.category, &request.from, &request.to, &request.value)
    }
}
