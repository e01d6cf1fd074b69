//! Command execution.
//!
//! Each command renders its result to a string; the entry point prints it.

use std::fmt::Write as _;
use std::num::ParseIntError;

use thiserror::Error;

use want::config::{Command, ValidatedConfig};
use want::layout::{Category, bits_to_value, field_of};
use want::{DecodedView, Want, WantError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Options could not be encoded.
    #[error("{0}")]
    Encode(#[from] WantError),

    /// The packed value is not an unsigned 32-bit integer.
    #[error("Invalid packed value '{value}': {source}")]
    InvalidBits {
        /// The rejected input
        value: String,
        /// Underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// No profile with the requested name.
    #[error("Unknown profile '{0}'")]
    UnknownProfile(String),

    /// JSON rendering failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Init is handled before configuration is loaded.
    #[error("The init command does not run against a loaded configuration")]
    Init,
}

/// Executes `command` against `config`, returning the text to print.
///
/// # Errors
///
/// Returns an error if an option token, packed value, or profile name is
/// invalid, or if strict mode finds conflicting values.
pub fn execute(command: &Command, config: &ValidatedConfig) -> Result<String, RunError> {
    match command {
        Command::Encode { values } => encode(values, config),
        Command::Decode { bits } => decode(bits, config),
        Command::Profile { name } => profile(name, config),
        Command::Profiles => Ok(list_profiles(config)),
        Command::Layout => Ok(layout_table()),
        Command::Init { .. } => Err(RunError::Init),
    }
}

fn encode(tokens: &[String], config: &ValidatedConfig) -> Result<String, RunError> {
    tracing::debug!(count = tokens.len(), mode = ?config.mode, "Encoding options");
    let want = Want::parse_values(tokens, config.mode)?;
    render(want, config.json)
}

fn decode(bits: &str, config: &ValidatedConfig) -> Result<String, RunError> {
    let want = Want::from_bits(parse_bits(bits)?);
    if want.has_unused_bits() {
        tracing::warn!(bits = want.bits(), "Packed value has bits outside every category");
    }
    render(want, config.json)
}

fn profile(name: &str, config: &ValidatedConfig) -> Result<String, RunError> {
    let profile = config
        .profiles
        .get(name)
        .ok_or_else(|| RunError::UnknownProfile(name.to_string()))?;

    tracing::debug!(profile = %profile.name, source = ?profile.source, "Encoding profile");
    render(profile.encode(config.mode)?, config.json)
}

/// Parses a decimal, `0x` hex or `0b` binary `u32`.
///
/// # Errors
///
/// Returns [`RunError::InvalidBits`] if the text is not a valid `u32`.
pub fn parse_bits(text: &str) -> Result<u32, RunError> {
    let trimmed = text.trim().replace('_', "");
    let parsed = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)
    } else if let Some(bin) = trimmed
        .strip_prefix("0b")
        .or_else(|| trimmed.strip_prefix("0B"))
    {
        u32::from_str_radix(bin, 2)
    } else {
        trimmed.parse()
    };

    parsed.map_err(|source| RunError::InvalidBits {
        value: text.to_string(),
        source,
    })
}

/// Renders a packed value as text or JSON.
///
/// # Errors
///
/// Returns [`RunError::Json`] if JSON serialization fails.
pub fn render(want: Want, json: bool) -> Result<String, RunError> {
    let view = DecodedView::from(want);
    if json {
        return Ok(serde_json::to_string_pretty(&view)?);
    }

    Ok(format!(
        "bits    {bits} ({bits:#04x})\n\
         links   {links}\n\
         match   {matching} (loose: {loose}, completion: {completion})\n\
         local   {local}\n\
         remote  {remote}",
        bits = view.bits,
        links = view.links_type.name(),
        matching = view.match_type.name(),
        loose = view.loose_match,
        completion = view.completion_match,
        local = view.local_type.name(),
        remote = view.remote_type.name(),
    ))
}

fn list_profiles(config: &ValidatedConfig) -> String {
    let mut out = String::new();
    for profile in config.profiles.iter() {
        let values = if profile.values.is_empty() {
            "(defaults)".to_string()
        } else {
            profile
                .values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        let _ = writeln!(out, "{:<12} {:<8} {values}", profile.name, source_label(profile.source));
    }
    out.trim_end().to_string()
}

const fn source_label(source: want::profile::ProfileSource) -> &'static str {
    match source {
        want::profile::ProfileSource::Builtin => "builtin",
        want::profile::ProfileSource::Config => "config",
    }
}

fn layout_table() -> String {
    let mut out = String::from("category offset width mask  values");
    for category in Category::ALL {
        let field = field_of(category);
        let values = (0..=field.value_mask())
            .map(|bits| bits_to_value(category, bits).name())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(
            out,
            "\n{:<8} {:<6} {:<5} {:#04x}  {values}",
            category.name(),
            field.offset(),
            field.width(),
            field.mask(),
        );
    }
    out
}
