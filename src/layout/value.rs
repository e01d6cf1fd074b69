//! Categories and their enumerated values.
//!
//! Each category owns a small enum of legal values. [`WantValue`] tags a value
//! with its category so mixed-category inputs can travel in one sequence.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::error::ParseValueError;

/// One independent configuration dimension packed into its own bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// How links are rendered.
    Links,
    /// How strictly link targets are matched.
    Match,
    /// How links to local files are resolved.
    Local,
    /// How links to remote resources are resolved.
    Remote,
}

impl Category {
    /// Every category, in layout order.
    pub const ALL: [Self; 4] = [Self::Links, Self::Match, Self::Local, Self::Remote];

    /// Position of this category in [`Self::ALL`] and in the layout table.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Links => 0,
            Self::Match => 1,
            Self::Local => 2,
            Self::Remote => 3,
        }
    }

    /// Lowercase name used in textual values (`local=uri`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Links => "links",
            Self::Match => "match",
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseValueError::UnknownCategory(s.to_string()))
    }
}

/// Link rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Links {
    /// Links are not rendered.
    None,
    /// Links are rendered as URLs.
    Url,
}

impl Links {
    /// Field-relative bit pattern.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Url => 1,
        }
    }

    /// Decodes field-relative bits; only the lowest bit is significant.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        if bits & 1 == 0 { Self::None } else { Self::Url }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Url => "url",
        }
    }
}

bitflags! {
    /// The two independent bits of the match field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MatchFlags: u32 {
        /// Loose matching of link targets.
        const LOOSE = 1;
        /// Completion-style (prefix) matching of link targets.
        const COMPLETION = 1 << 1;
    }
}

/// Match strictness.
///
/// `Loose` and `Completion` are independent bits. When both are set the field
/// reads back as [`Match::LooseCompletion`], which also encodes both bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Match {
    /// Neither bit set.
    Exact,
    /// Loose bit only.
    Loose,
    /// Completion bit only.
    Completion,
    /// Both bits set.
    #[serde(rename = "loose+completion")]
    LooseCompletion,
}

impl Match {
    /// Bits this value contributes to the match field.
    #[must_use]
    pub const fn flags(self) -> MatchFlags {
        match self {
            Self::Exact => MatchFlags::empty(),
            Self::Loose => MatchFlags::LOOSE,
            Self::Completion => MatchFlags::COMPLETION,
            Self::LooseCompletion => MatchFlags::all(),
        }
    }

    #[must_use]
    pub const fn from_flags(flags: MatchFlags) -> Self {
        match (
            flags.contains(MatchFlags::LOOSE),
            flags.contains(MatchFlags::COMPLETION),
        ) {
            (false, false) => Self::Exact,
            (true, false) => Self::Loose,
            (false, true) => Self::Completion,
            (true, true) => Self::LooseCompletion,
        }
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.flags().bits()
    }

    /// Decodes field-relative bits; bits outside the two flags are ignored.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self::from_flags(MatchFlags::from_bits_truncate(bits))
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Loose => "loose",
            Self::Completion => "completion",
            Self::LooseCompletion => "loose+completion",
        }
    }
}

/// Resolution mode for links to local files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Local {
    /// Local links are not resolved.
    None,
    /// Resolve to a repository-relative reference.
    Ref,
    /// Resolve to a `file://` URI.
    Uri,
    /// Resolve to a hosted URL.
    Url,
}

impl Local {
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Ref => 1,
            Self::Uri => 2,
            Self::Url => 3,
        }
    }

    /// Decodes field-relative bits; only the lowest two bits are significant.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0 => Self::None,
            1 => Self::Ref,
            2 => Self::Uri,
            _ => Self::Url,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ref => "ref",
            Self::Uri => "uri",
            Self::Url => "url",
        }
    }
}

/// Resolution mode for links to remote resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Remote {
    /// Remote links are not resolved.
    None,
    /// Resolve to a repository-relative reference.
    Ref,
    /// Resolve to a `file://` URI of the local checkout.
    Uri,
    /// Resolve to a hosted URL.
    Url,
}

impl Remote {
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Ref => 1,
            Self::Uri => 2,
            Self::Url => 3,
        }
    }

    /// Decodes field-relative bits; only the lowest two bits are significant.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0b11 {
            0 => Self::None,
            1 => Self::Ref,
            2 => Self::Uri,
            _ => Self::Url,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ref => "ref",
            Self::Uri => "uri",
            Self::Url => "url",
        }
    }
}

/// A value tagged with the category it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WantValue {
    Links(Links),
    Match(Match),
    Local(Local),
    Remote(Remote),
}

impl WantValue {
    /// The category this value belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Links(_) => Category::Links,
            Self::Match(_) => Category::Match,
            Self::Local(_) => Category::Local,
            Self::Remote(_) => Category::Remote,
        }
    }

    /// Name of the value within its category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Links(v) => v.name(),
            Self::Match(v) => v.name(),
            Self::Local(v) => v.name(),
            Self::Remote(v) => v.name(),
        }
    }

    /// Parses the value part of `category=value` for a known category.
    ///
    /// # Errors
    ///
    /// Returns [`ParseValueError::UnknownValue`] if `value` is not legal for `category`.
    pub fn parse_in(category: Category, value: &str) -> Result<Self, ParseValueError> {
        let value = value.trim();
        let found = match category {
            Category::Links => [Links::None, Links::Url]
                .into_iter()
                .find(|v| v.name().eq_ignore_ascii_case(value))
                .map(Self::Links),
            Category::Match => [
                Match::Exact,
                Match::Loose,
                Match::Completion,
                Match::LooseCompletion,
            ]
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(value))
            .map(Self::Match),
            Category::Local => [Local::None, Local::Ref, Local::Uri, Local::Url]
                .into_iter()
                .find(|v| v.name().eq_ignore_ascii_case(value))
                .map(Self::Local),
            Category::Remote => [Remote::None, Remote::Ref, Remote::Uri, Remote::Url]
                .into_iter()
                .find(|v| v.name().eq_ignore_ascii_case(value))
                .map(Self::Remote),
        };

        found.ok_or_else(|| ParseValueError::UnknownValue {
            category,
            value: value.to_string(),
        })
    }
}

impl fmt::Display for WantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.category(), self.name())
    }
}

impl FromStr for WantValue {
    type Err = ParseValueError;

    /// Parses `category=value`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, value) = s
            .split_once('=')
            .ok_or_else(|| ParseValueError::Malformed(s.to_string()))?;

        Self::parse_in(category.parse()?, value)
    }
}

impl From<Links> for WantValue {
    fn from(value: Links) -> Self {
        Self::Links(value)
    }
}

impl From<Match> for WantValue {
    fn from(value: Match) -> Self {
        Self::Match(value)
    }
}

impl From<Local> for WantValue {
    fn from(value: Local) -> Self {
        Self::Local(value)
    }
}

impl From<Remote> for WantValue {
    fn from(value: Remote) -> Self {
        Self::Remote(value)
    }
}
