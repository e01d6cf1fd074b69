//! The packed options value and its accessors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::{
    Category, LINKS, LOCAL, Links, Local, MATCH, Match, MatchFlags, REMOTE, Remote, WantValue,
    bits_to_value, field_of, used_mask,
};

use super::error::WantError;
use super::explicit::{Explicit, MergeMode};
use super::rules::{Resolved, resolve};

/// Link-resolution options packed into one `u32`.
///
/// Built once from zero or more explicit values, then passed around by value.
/// Categories the caller leaves out are filled by the implication rules in
/// [`RULES`](super::RULES), so the defaults of one category depend on what
/// was requested for the others.
///
/// Equal bit patterns are interchangeable; any `u32` decodes without error.
///
/// # Examples
///
/// ```
/// use want::{want, Links, Local, Remote};
///
/// let opts = want!(Local::Ref);
/// assert!(opts.local_ref());
/// assert_eq!(opts.remote_type(), Remote::None);
/// assert_eq!(opts.links_type(), Links::None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Want(u32);

impl Want {
    /// Encodes `values`, keeping the last value for repeated single-valued
    /// categories and OR-ing match values.
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = WantValue>) -> Self {
        Self::from_explicit(&Explicit::lenient(values))
    }

    /// Encodes `values`, rejecting conflicting values for one category.
    ///
    /// # Errors
    ///
    /// Returns [`WantError::Conflict`] if a category receives two values that
    /// cannot both hold.
    pub fn try_from_values(values: impl IntoIterator<Item = WantValue>) -> Result<Self, WantError> {
        Explicit::strict(values).map(|explicit| Self::from_explicit(&explicit))
    }

    /// Encodes `values` under the given merge mode.
    ///
    /// # Errors
    ///
    /// Returns [`WantError::Conflict`] only in [`MergeMode::Strict`].
    pub fn encode(
        values: impl IntoIterator<Item = WantValue>,
        mode: MergeMode,
    ) -> Result<Self, WantError> {
        let mut explicit = Explicit::default();
        for value in values {
            explicit.apply(value, mode)?;
        }
        Ok(Self::from_explicit(&explicit))
    }

    /// Parses `category=value` tokens and encodes them under `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`WantError::Parse`] for the first token that does not parse,
    /// or [`WantError::Conflict`] in [`MergeMode::Strict`].
    pub fn parse_values<S: AsRef<str>>(
        tokens: impl IntoIterator<Item = S>,
        mode: MergeMode,
    ) -> Result<Self, WantError> {
        let values = tokens
            .into_iter()
            .map(|token| token.as_ref().parse::<WantValue>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::encode(values, mode)
    }

    /// Applies the implication rules to `explicit` and packs the result.
    #[must_use]
    pub fn from_explicit(explicit: &Explicit) -> Self {
        Self::pack(resolve(explicit))
    }

    /// Packs fully resolved values without applying any rule.
    #[must_use]
    pub const fn pack(resolved: Resolved) -> Self {
        let mut bits = 0;
        bits = LINKS.insert(bits, resolved.links.bits());
        bits = MATCH.insert(bits, resolved.matching.bits());
        bits = LOCAL.insert(bits, resolved.local.bits());
        bits = REMOTE.insert(bits, resolved.remote.bits());
        Self(bits)
    }

    /// Wraps a raw bit pattern. Every pattern is accepted.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if bits outside every category field are set.
    ///
    /// Encoder output never has such bits.
    #[must_use]
    pub const fn has_unused_bits(self) -> bool {
        self.0 & !used_mask() != 0
    }

    /// Starts a typed builder.
    #[must_use]
    pub fn builder() -> WantBuilder {
        WantBuilder::default()
    }

    // ------------------------------------------------------------------
    // Category values
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn links_type(self) -> Links {
        Links::from_bits(LINKS.extract(self.0))
    }

    /// Match value; both bits set reads as [`Match::LooseCompletion`].
    #[must_use]
    pub const fn match_type(self) -> Match {
        Match::from_flags(self.match_flags())
    }

    #[must_use]
    pub const fn match_flags(self) -> MatchFlags {
        MatchFlags::from_bits_truncate(MATCH.extract(self.0))
    }

    #[must_use]
    pub const fn local_type(self) -> Local {
        Local::from_bits(LOCAL.extract(self.0))
    }

    #[must_use]
    pub const fn remote_type(self) -> Remote {
        Remote::from_bits(REMOTE.extract(self.0))
    }

    /// Value stored for `category`.
    #[must_use]
    pub const fn value_of(self, category: Category) -> WantValue {
        bits_to_value(category, field_of(category).extract(self.0))
    }

    /// Every category as an explicit value, in layout order.
    ///
    /// Encoding these reproduces the bits of any encoder output.
    #[must_use]
    pub const fn explicit_values(self) -> [WantValue; 4] {
        [
            WantValue::Links(self.links_type()),
            WantValue::Match(self.match_type()),
            WantValue::Local(self.local_type()),
            WantValue::Remote(self.remote_type()),
        ]
    }

    // ------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn links(self) -> bool {
        !matches!(self.links_type(), Links::None)
    }

    #[must_use]
    pub const fn local(self) -> bool {
        !matches!(self.local_type(), Local::None)
    }

    #[must_use]
    pub const fn remote(self) -> bool {
        !matches!(self.remote_type(), Remote::None)
    }

    #[must_use]
    pub const fn local_ref(self) -> bool {
        matches!(self.local_type(), Local::Ref)
    }

    #[must_use]
    pub const fn local_uri(self) -> bool {
        matches!(self.local_type(), Local::Uri)
    }

    #[must_use]
    pub const fn local_url(self) -> bool {
        matches!(self.local_type(), Local::Url)
    }

    #[must_use]
    pub const fn remote_ref(self) -> bool {
        matches!(self.remote_type(), Remote::Ref)
    }

    #[must_use]
    pub const fn remote_uri(self) -> bool {
        matches!(self.remote_type(), Remote::Uri)
    }

    #[must_use]
    pub const fn remote_url(self) -> bool {
        matches!(self.remote_type(), Remote::Url)
    }

    /// Loose bit, regardless of the completion bit.
    #[must_use]
    pub const fn loose_match(self) -> bool {
        self.match_flags().contains(MatchFlags::LOOSE)
    }

    /// Completion bit, regardless of the loose bit.
    #[must_use]
    pub const fn completion_match(self) -> bool {
        self.match_flags().contains(MatchFlags::COMPLETION)
    }
}

impl Default for Want {
    /// Pure defaults: links=url, match=exact, local=ref, remote=ref.
    fn default() -> Self {
        Self::from_values(std::iter::empty::<WantValue>())
    }
}

impl From<Want> for u32 {
    fn from(want: Want) -> Self {
        want.bits()
    }
}

impl fmt::Display for Want {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [links, matching, local, remote] = self.explicit_values();
        write!(f, "{links} {matching} {local} {remote}")
    }
}

impl fmt::Debug for Want {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Want({:#04x}: {self})", self.0)
    }
}

/// Typed builder collecting explicit values for a [`Want`].
///
/// # Examples
///
/// ```
/// use want::{Want, Links, Local, Remote};
///
/// let opts = Want::builder()
///     .local(Local::Uri)
///     .remote(Remote::Url)
///     .links(Links::Url)
///     .build();
///
/// assert!(opts.local_uri() && opts.remote_url() && opts.links());
/// ```
#[derive(Debug, Clone, Default)]
pub struct WantBuilder {
    values: Vec<WantValue>,
}

impl WantBuilder {
    #[must_use]
    pub fn links(self, value: Links) -> Self {
        self.value(value)
    }

    /// Adds a match value; repeated calls OR their bits.
    #[must_use]
    pub fn matching(self, value: Match) -> Self {
        self.value(value)
    }

    #[must_use]
    pub fn local(self, value: Local) -> Self {
        self.value(value)
    }

    #[must_use]
    pub fn remote(self, value: Remote) -> Self {
        self.value(value)
    }

    /// Adds any category value.
    #[must_use]
    pub fn value(mut self, value: impl Into<WantValue>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Encodes leniently.
    #[must_use]
    pub fn build(self) -> Want {
        Want::from_values(self.values)
    }

    /// Encodes strictly.
    ///
    /// # Errors
    ///
    /// Returns [`WantError::Conflict`] on conflicting values for one category.
    pub fn try_build(self) -> Result<Want, WantError> {
        Want::try_from_values(self.values)
    }
}
