//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// Want: link-resolution option packing
///
/// Encodes link-resolution options into a single integer and decodes
/// packed integers back into their options.
#[derive(Debug, Parser)]
#[command(name = "want")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Reject conflicting values for the same category
    #[arg(long, global = true)]
    pub strict: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for want
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode options given as 'category=value' (e.g. local=uri match=loose)
    Encode {
        /// Options to encode; none means all defaults
        #[arg(value_name = "CATEGORY=VALUE")]
        values: Vec<String>,
    },

    /// Decode a packed value (decimal or 0x-prefixed hex)
    Decode {
        /// The packed value
        bits: String,
    },

    /// Encode a named profile
    Profile {
        /// Profile name
        name: String,
    },

    /// List available profiles
    Profiles,

    /// Print the bit layout
    Layout,

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE_NAME)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
