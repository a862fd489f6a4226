//! Gauge MCP Server
//!
//! Line-delimited JSON-RPC over stdio. Logs go to stderr.
//!
//! Tools:
//! - list_categories: Conversion categories in display order
//! - units_for: Units of one category in display order
//! - convert: Convert a value and record it in the history
//! - history: The last 10 conversions
//! - unit_definitions: Short SI glossary
//!
//! Environment:
//! - GAUGE_LOG: log filter (default "info", RUST_LOG as fallback)
//! - GAUGE_DISPLAY_PLACES: decimal places for results (default 10)

mod config;
mod error;
mod logger;
mod server;

use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::info;

use config::Config;
use error::AppError;
use server::{serve, Server, PROTOCOL_VERSION};

fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    logger::init(&config.log)?;

    gauge::validate_registry()?;

    let session = gauge::live_session()
        .map_err(|e| AppError::Config(format!("rate source: {}", e)))?
        .with_display_places(config.display_places);
    let mut server = Server::new(session);

    info!(version = env!("CARGO_PKG_VERSION"), protocol = PROTOCOL_VERSION, "Gauge MCP Server started");
    info!(
        categories = gauge::list_categories().len(),
        display_places = config.display_places,
        "registry validated"
    );
    info!(
        stdin_terminal = io::stdin().is_terminal(),
        stdout_terminal = io::stdout().is_terminal(),
        "server ready, waiting for requests"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(&mut server, stdin.lock(), stdout.lock())?;

    info!("server shutting down");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The subscriber may not be installed yet
            eprintln!("gauge-mcp: {}", e);
            ExitCode::FAILURE
        }
    }
}
