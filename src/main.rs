//! folio CLI entrypoint for pagination state and link rendering.

use std::io::{self, Write};
use std::process::ExitCode;

use folio::{FolioConfig, PaginationError};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), PaginationError> {
    let config = load_config()?;
    init_tracing(&config.log_level);
    config.validate()?;

    let mut stdout = io::stdout().lock();
    cli::run(&mut stdout, &config)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`PaginationError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<FolioConfig, PaginationError> {
    FolioConfig::load().map_err(|error| PaginationError::Configuration {
        message: error.to_string(),
    })
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, or by `level` when
/// `RUST_LOG` is unset or invalid.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ignored = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
