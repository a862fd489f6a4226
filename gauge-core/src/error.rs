//! Conversion errors
//!
//! Errors never crash the session. Every converter returns one of these as a
//! value, and the presentation layer renders it the same way it renders a
//! successful magnitude.

use crate::NumberError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNSUPPORTED_CURRENCY: &str = "UNSUPPORTED_CURRENCY";
    pub const NETWORK_FAILURE: &str = "NETWORK_FAILURE";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const NUMERIC_ERROR: &str = "NUMERIC_ERROR";
}

/// Everything that can go wrong while converting a single value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Target currency code absent from the fetched rate table
    #[error("Currency not supported: {code}")]
    UnsupportedCurrency { code: String },

    /// The exchange-rate request could not complete
    #[error("Exchange rate request failed: {0}")]
    NetworkFailure(String),

    /// Source and target belong to different physical dimensions
    #[error("Cannot convert {from} ({from_dim}) to {to} ({to_dim}): incompatible dimensions")]
    IncompatibleUnits {
        from: String,
        to: String,
        from_dim: String,
        to_dim: String,
    },

    /// Unit identifier not recognised by the units engine
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Numeric error: {0}")]
    Numeric(#[from] NumberError),
}

impl ConvertError {
    pub fn network(details: impl std::fmt::Display) -> Self {
        Self::NetworkFailure(details.to_string())
    }

    pub fn unsupported_currency(code: impl Into<String>) -> Self {
        Self::UnsupportedCurrency { code: code.into() }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedCurrency { .. } => codes::UNSUPPORTED_CURRENCY,
            Self::NetworkFailure(_) => codes::NETWORK_FAILURE,
            Self::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
            Self::UnknownUnit(_) => codes::UNKNOWN_UNIT,
            Self::UnknownCategory(_) => codes::UNKNOWN_CATEGORY,
            Self::InvalidValue(_) => codes::INVALID_VALUE,
            Self::Numeric(_) => codes::NUMERIC_ERROR,
        }
    }

    /// Hint for fixing the error, when there is one worth giving
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::UnsupportedCurrency { code } => {
                Some(format!("The rate service has no rate for '{}'; pick another currency", code))
            }
            Self::NetworkFailure(_) => Some("Check connectivity and try again".to_string()),
            Self::IncompatibleUnits { .. } => {
                Some("Pick source and target units from the same category".to_string())
            }
            Self::UnknownUnit(_) | Self::UnknownCategory(_) => {
                Some("Use list_categories and units_for to see valid names".to_string())
            }
            Self::InvalidValue(_) => Some("Enter a finite value of zero or more".to_string()),
            Self::Numeric(_) => None,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport::from(self)
    }
}

/// Serializable view of a [`ConvertError`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorReport {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<&ConvertError> for ErrorReport {
    fn from(err: &ConvertError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            suggestion: err.suggestion(),
        }
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}
