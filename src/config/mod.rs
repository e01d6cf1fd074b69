//! Configuration layer for Want.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Sources
//!
//! 1. **Explicit `--config` path** - loaded if given; a missing file is an error
//! 2. **Per-user config file** - `<config_dir>/want/want.toml`, loaded only if it exists
//! 3. **Built-in defaults** - presets and lenient merging
//!
//! # Boolean Flag Semantics
//!
//! `strict` uses OR semantics: if set `true` in either CLI or TOML, the
//! result is `true`. The CLI cannot turn it off once the file enables it.
//!
//! # Profiles
//!
//! Config profiles are layered over the built-in presets. A config profile
//! with a preset's name replaces the preset entirely (not merged).

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{OneOrMany, ProfileSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
