//! Host-level error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("registry error: {0}")]
    Registry(#[from] gauge::ConvertError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn config_error_display() {
        let e = AppError::Config("GAUGE_DISPLAY_PLACES: not a number".into());
        assert!(e.to_string().contains("GAUGE_DISPLAY_PLACES"));
    }

    #[test]
    fn registry_error_converts() {
        let e: AppError = gauge::ConvertError::UnknownUnit("furlong".into()).into();
        assert!(e.to_string().starts_with("registry error"));
        assert!(e.to_string().contains("furlong"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let e: AppError = io_err.into();
        assert!(e.to_string().contains("io error"));
        let _: &dyn Error = &e;
    }
}
