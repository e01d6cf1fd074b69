//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::options::WantError;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A profile in the config file does not encode.
    #[error("Invalid profile '{name}': {source}")]
    InvalidProfile {
        /// Profile name
        name: String,
        /// Underlying encode error
        #[source]
        source: WantError,
    },
}
