//! Named option profiles.
//!
//! A profile is a named list of explicit values. Built-in presets cover the
//! common renderers; profiles from the config file are layered on top and
//! replace presets of the same name.

use std::collections::BTreeMap;

use crate::layout::{Links, Local, Match, Remote, WantValue};
use crate::options::{MergeMode, Want, WantError};

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;

/// Built-in presets, by name.
pub const PRESETS: [(&str, &[WantValue]); 5] = [
    ("default", &[]),
    (
        "image",
        &[
            WantValue::Local(Local::Uri),
            WantValue::Remote(Remote::Uri),
            WantValue::Links(Links::None),
        ],
    ),
    (
        "link",
        &[
            WantValue::Local(Local::Uri),
            WantValue::Remote(Remote::Url),
            WantValue::Links(Links::Url),
        ],
    ),
    (
        "http",
        &[
            WantValue::Local(Local::Url),
            WantValue::Remote(Remote::Url),
            WantValue::Links(Links::Url),
        ],
    ),
    ("completion", &[WantValue::Match(Match::Completion)]),
];

/// Where a profile was defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    /// One of [`PRESETS`].
    Builtin,
    /// The config file.
    Config,
}

/// A named list of explicit values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub values: Vec<WantValue>,
    pub source: ProfileSource,
}

impl Profile {
    /// Encodes this profile's values.
    ///
    /// # Errors
    ///
    /// Returns [`WantError::Conflict`] in [`MergeMode::Strict`] if the profile
    /// lists conflicting values.
    pub fn encode(&self, mode: MergeMode) -> Result<Want, WantError> {
        Want::encode(self.values.iter().copied(), mode)
    }
}

/// Profiles available by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSet {
    profiles: BTreeMap<String, Profile>,
}

impl ProfileSet {
    /// Only the built-in presets.
    #[must_use]
    pub fn builtin() -> Self {
        let profiles = PRESETS
            .iter()
            .map(|(name, values)| {
                let profile = Profile {
                    name: (*name).to_string(),
                    values: values.to_vec(),
                    source: ProfileSource::Builtin,
                };
                (profile.name.clone(), profile)
            })
            .collect();

        Self { profiles }
    }

    /// Adds a config profile, replacing any profile of the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, values: Vec<WantValue>) -> Self {
        let name = name.into();
        if self.profiles.contains_key(&name) {
            tracing::debug!(profile = %name, "Config profile shadows existing profile");
        }
        self.profiles.insert(
            name.clone(),
            Profile {
                name,
                values,
                source: ProfileSource::Config,
            },
        );
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Profiles in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileSet {
    fn default() -> Self {
        Self::builtin()
    }
}
