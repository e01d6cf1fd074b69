//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::options::MergeMode;
use crate::profile::ProfileSet;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// Every config profile is encoded once under the resolved merge mode, so an
/// invalid profile is reported at load time rather than when it is used.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// How repeated values for one category are reconciled
    pub mode: MergeMode,

    /// Built-in presets plus config profiles
    pub profiles: ProfileSet,

    /// Config file that was loaded, if any
    pub source: Option<PathBuf>,

    /// Print results as JSON
    pub json: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source_str = self
            .source
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Config {{ mode: {:?}, profiles: {}, source: {}, json: {} }}",
            self.mode,
            self.profiles.len(),
            source_str,
            self.json,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// `strict` uses OR semantics: set in either source, it is on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProfile`] if a config profile has
    /// conflicting values under strict mode.
    pub fn from_raw(cli: &Cli, toml: Option<TomlConfig>) -> Result<Self, ConfigError> {
        let strict = defaults::STRICT || cli.strict || toml.as_ref().is_some_and(|t| t.strict);
        let mode = if strict {
            MergeMode::Strict
        } else {
            MergeMode::Lenient
        };

        let profiles = Self::build_profiles(toml, mode)?;

        Ok(Self {
            mode,
            profiles,
            source: None,
            json: cli.json,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path. Otherwise
    /// the per-user config file is used when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| defaults::user_config_path().filter(|p| p.is_file()));

        let toml = path.as_deref().map(TomlConfig::load).transpose()?;

        let mut config = Self::from_raw(cli, toml)?;
        config.source = path;
        Ok(config)
    }

    fn build_profiles(toml: Option<TomlConfig>, mode: MergeMode) -> Result<ProfileSet, ConfigError> {
        let mut profiles = ProfileSet::builtin();

        let Some(toml) = toml else {
            return Ok(profiles);
        };

        for (name, section) in toml.profiles {
            profiles = profiles.with(name.as_str(), section.into_values());

            if let Some(profile) = profiles.get(&name) {
                profile
                    .encode(mode)
                    .map_err(|source| ConfigError::InvalidProfile {
                        name: name.clone(),
                        source,
                    })?;
            }
        }

        Ok(profiles)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
