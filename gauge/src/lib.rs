//! Gauge - unit and currency conversion with a rolling history
//!
//! A [`Session`] is the single entry point: it lists categories and their
//! units, converts through the units engine or the live exchange-rate
//! service, and keeps the last [`HISTORY_CAPACITY`] conversions.

mod registry;
mod dispatch;
mod history;
mod session;

pub use registry::{
    Category, UnitDefinition, list_categories, units_for, unit_definitions, validate_registry,
};
pub use dispatch::{ConversionRequest, Dispatcher};
pub use history::{History, HISTORY_CAPACITY, format_entry};
pub use session::{Session, DEFAULT_DISPLAY_PLACES};

pub use gauge_core::{ConvertError, ErrorReport, Number};
pub use gauge_currency::{HttpRateSource, RateSource, RateTable};

/// Session backed by the public exchange-rate service
pub fn live_session() -> Result<Session<HttpRateSource>, ConvertError> {
    Ok(Session::new(HttpRateSource::new()?))
}
