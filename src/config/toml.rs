//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::layout::{Links, Local, Match, Remote, WantValue};

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Reject conflicting values for the same category
    #[serde(default)]
    pub strict: bool,

    /// Named profiles
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileSection>,
}

/// One `[profiles.<name>]` table.
///
/// Keys that are left out are untouched categories, filled by the
/// implication rules when the profile is encoded.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSection {
    /// Link rendering: "none" or "url"
    pub links: Option<Links>,

    /// Match strictness: one value or a list whose bits are combined
    #[serde(rename = "match")]
    pub matching: Option<OneOrMany<Match>>,

    /// Local resolution: "none", "ref", "uri" or "url"
    pub local: Option<Local>,

    /// Remote resolution: "none", "ref", "uri" or "url"
    pub remote: Option<Remote>,
}

/// A single value or a list of values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

impl ProfileSection {
    /// Explicit values of this profile, in category order.
    #[must_use]
    pub fn into_values(self) -> Vec<WantValue> {
        let mut values = Vec::new();
        values.extend(self.links.map(WantValue::from));
        if let Some(matching) = self.matching {
            values.extend(matching.into_vec().into_iter().map(WantValue::from));
        }
        values.extend(self.local.map(WantValue::from));
        values.extend(self.remote.map(WantValue::from));
        values
    }
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Want Configuration File

# Reject conflicting values for the same category (default: false)
# Can also be enabled with the --strict CLI flag
# strict = false

# Named profiles. Each key is optional; categories left out are
# filled by the defaulting rules:
#   - neither local nor remote set: local = "ref", remote = "ref"
#   - one side set to "none": the other side defaults to "ref"
#   - one side set to anything else: the other side defaults to "none"
#   - links defaults to "url" only when a side is left on its default
#   - match defaults to "exact"
#
# Profiles named like a built-in preset (default, image, link, http,
# completion) replace that preset.

# [profiles.image]
# local = "uri"
# remote = "uri"
# links = "none"

# [profiles.wiki]
# remote = "url"

# [profiles.completion]
# Accepted values: "exact", "loose", "completion", or a list to combine bits
# match = ["loose", "completion"]
"#
    .to_string()
}
