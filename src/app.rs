//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use want::config::ConfigError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable file, invalid profile, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - bad option token, conflict, unknown profile, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'want init' to generate a configuration template.");
        }
        ConfigError::InvalidProfile { .. } => {
            eprintln!("\nStrict mode rejects repeated categories; fix the profile or disable strict.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
