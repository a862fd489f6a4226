//! One user's conversion session: the dispatcher plus its history

use tracing::{info, warn};
use gauge_core::{ConvertError, Number};
use gauge_currency::RateSource;
use crate::dispatch::{ConversionRequest, Dispatcher};
use crate::history::{format_entry, History};
use crate::registry::{self, Category, UnitDefinition};

/// Decimal places used when rendering magnitudes, before trimming zeros
pub const DEFAULT_DISPLAY_PLACES: u32 = 10;

/// Everything the presentation layer talks to
pub struct Session<S> {
    dispatcher: Dispatcher<S>,
    history: History,
    display_places: u32,
}

impl<S: RateSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            dispatcher: Dispatcher::new(source),
            history: History::new(),
            display_places: DEFAULT_DISPLAY_PLACES,
        }
    }

    pub fn with_display_places(mut self, places: u32) -> Self {
        self.display_places = places;
        self
    }

    pub fn list_categories(&self) -> Vec<&'static str> {
        registry::list_categories()
    }

    pub fn units_for(&self, category: &str) -> Result<&'static [&'static str], ConvertError> {
        let category: Category = category.parse()?;
        Ok(registry::units_for(category))
    }

    pub fn unit_definitions(&self) -> &'static [UnitDefinition] {
        registry::unit_definitions()
    }

    /// Convert and record the attempt in the history.
    ///
    /// An unknown category or an invalid value is rejected before anything
    /// is dispatched and leaves the history untouched. Converter failures
    /// are recorded with their message in place of the result.
    pub fn convert(&mut self, category: &str, from: &str, to: &str, value: f64) -> Result<Number, ConvertError> {
        let category: Category = category.parse()?;
        let request = ConversionRequest::from_f64(category, from, to, value)?;
        self.run(&request)
    }

    /// Like [`Session::convert`] for a request that is already validated
    pub fn run(&mut self, request: &ConversionRequest) -> Result<Number, ConvertError> {
        let outcome = self.dispatcher.dispatch(request);

        let rendered = match &outcome {
            Ok(result) => {
                info!(category = %request.category, from = %request.from, to = %request.to, %result, "converted");
                self.display(result)
            }
            Err(e) => {
                warn!(category = %request.category, from = %request.from, to = %request.to, error = %e, "conversion failed");
                e.to_string()
            }
        };

        self.history.record(format_entry(
            request.category.name(),
            &self.display(&request.value),
            &request.from,
            &rendered,
            &request.to,
        ));

        outcome
    }

    /// Entries oldest first
    pub fn history_list(&self) -> Vec<String> {
        self.history.list()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Render a magnitude at the session's display precision
    pub fn display(&self, n: &Number) -> String {
        n.as_trimmed(self.display_places)
    }
}
