//! Logging initialisation via tracing-subscriber.
//!
//! Logs go to stderr; stdout carries only protocol messages.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Initialise the global tracing subscriber.
///
/// `filter` is an `EnvFilter` directive such as `"info"` or
/// `"gauge=debug,info"`. `RUST_LOG` is only consulted when `filter` is
/// invalid.
pub fn init(filter: &str) -> Result<(), AppError> {
    let env_filter = match EnvFilter::try_new(filter) {
        Ok(f) => f,
        Err(filter_err) => EnvFilter::try_from_default_env().map_err(|env_err| {
            AppError::Logger(format!(
                "invalid log filter '{filter}': {filter_err}; RUST_LOG parse failed: {env_err}"
            ))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_succeeds_or_already_init() {
        match init("info") {
            Ok(()) => {}
            Err(AppError::Logger(msg)) if msg.contains("set subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
