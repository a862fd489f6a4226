//! Runtime settings read from the environment at startup.

use crate::error::AppError;

pub const DEFAULT_LOG: &str = "info";
pub const DEFAULT_DISPLAY_PLACES: u32 = gauge::DEFAULT_DISPLAY_PLACES;

/// Largest accepted value for `GAUGE_DISPLAY_PLACES`
const MAX_DISPLAY_PLACES: u32 = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `EnvFilter` directive, from `GAUGE_LOG`
    pub log: String,
    /// Decimal places for rendered magnitudes, from `GAUGE_DISPLAY_PLACES`
    pub display_places: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: DEFAULT_LOG.to_string(),
            display_places: DEFAULT_DISPLAY_PLACES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take their defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Config::default();

        if let Some(log) = non_blank(get("GAUGE_LOG")) {
            config.log = log;
        }

        if let Some(places) = non_blank(get("GAUGE_DISPLAY_PLACES")) {
            let parsed: u32 = places.parse().map_err(|_| {
                AppError::Config(format!("GAUGE_DISPLAY_PLACES: '{places}' is not a whole number"))
            })?;
            if parsed > MAX_DISPLAY_PLACES {
                return Err(AppError::Config(format!(
                    "GAUGE_DISPLAY_PLACES: {parsed} exceeds the maximum of {MAX_DISPLAY_PLACES}"
                )));
            }
            config.display_places = parsed;
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log, "info");
        assert_eq!(config.display_places, 10);
    }

    #[test]
    fn reads_values() {
        let config = Config::from_lookup(lookup(&[
            ("GAUGE_LOG", "gauge=debug,warn"),
            ("GAUGE_DISPLAY_PLACES", " 4 "),
        ]))
        .unwrap();
        assert_eq!(config.log, "gauge=debug,warn");
        assert_eq!(config.display_places, 4);
    }

    #[test]
    fn blank_values_fall_back() {
        let config = Config::from_lookup(lookup(&[("GAUGE_LOG", "  "), ("GAUGE_DISPLAY_PLACES", "")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_bad_places() {
        for bad in ["ten", "-1", "2.5", "41"] {
            let err = Config::from_lookup(lookup(&[("GAUGE_DISPLAY_PLACES", bad)])).unwrap_err();
            assert!(matches!(err, AppError::Config(_)), "{bad}");
        }
    }
}
