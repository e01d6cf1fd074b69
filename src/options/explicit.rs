//! The explicit-request set: what the caller actually asked for.
//!
//! Each supplied value is folded into its category's slot by a small reducer.
//! The reducer used depends on the category and the [`MergeMode`]:
//!
//! | Category            | Lenient     | Strict                                |
//! |---------------------|-------------|---------------------------------------|
//! | links/local/remote  | last wins   | differing value is a conflict         |
//! | match               | OR of bits  | OR of bits, `exact` with a flag conflicts |

use crate::layout::{Category, Links, Local, Match, MatchFlags, Remote, WantValue};

use super::error::WantError;

/// How repeated values for one category are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Single-valued categories keep the last value supplied.
    #[default]
    Lenient,
    /// A second, different value for a category is rejected.
    Strict,
}

/// Per-category record of explicitly requested values.
///
/// `None` means the category was not touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Explicit {
    pub links: Option<Links>,
    pub matching: Option<MatchFlags>,
    pub local: Option<Local>,
    pub remote: Option<Remote>,
}

impl Explicit {
    /// Folds `values` leniently. Never fails.
    #[must_use]
    pub fn lenient(values: impl IntoIterator<Item = WantValue>) -> Self {
        let mut explicit = Self::default();
        for value in values {
            explicit.apply_lenient(value);
        }
        explicit
    }

    /// Folds `values` strictly, stopping at the first conflict.
    ///
    /// # Errors
    ///
    /// Returns [`WantError::Conflict`] if a category receives two values that
    /// cannot both hold.
    pub fn strict(values: impl IntoIterator<Item = WantValue>) -> Result<Self, WantError> {
        let mut explicit = Self::default();
        for value in values {
            explicit.apply_strict(value)?;
        }
        Ok(explicit)
    }

    /// Adds one value, keeping the last value for single-valued categories.
    pub fn apply_lenient(&mut self, value: WantValue) {
        match value {
            WantValue::Links(v) => last_wins(&mut self.links, v),
            WantValue::Match(v) => self.matching = Some(combine(self.matching, v)),
            WantValue::Local(v) => last_wins(&mut self.local, v),
            WantValue::Remote(v) => last_wins(&mut self.remote, v),
        }
    }

    /// Adds one value, rejecting a differing value for a category already set.
    ///
    /// # Errors
    ///
    /// Returns [`WantError::Conflict`] on a differing single value, or when
    /// `exact` meets `loose`/`completion` in the match category.
    pub fn apply_strict(&mut self, value: WantValue) -> Result<(), WantError> {
        match value {
            WantValue::Links(v) => reject_differing(&mut self.links, v),
            WantValue::Match(v) => {
                if let Some(previous) = self.matching {
                    if previous.is_empty() != v.flags().is_empty() {
                        return Err(WantError::Conflict {
                            category: Category::Match,
                            first: Match::from_flags(previous).into(),
                            second: v.into(),
                        });
                    }
                }
                self.matching = Some(combine(self.matching, v));
                Ok(())
            }
            WantValue::Local(v) => reject_differing(&mut self.local, v),
            WantValue::Remote(v) => reject_differing(&mut self.remote, v),
        }
    }

    /// Adds one value under `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`WantError::Conflict`] only in [`MergeMode::Strict`].
    pub fn apply(&mut self, value: WantValue, mode: MergeMode) -> Result<(), WantError> {
        match mode {
            MergeMode::Lenient => {
                self.apply_lenient(value);
                Ok(())
            }
            MergeMode::Strict => self.apply_strict(value),
        }
    }

    /// Returns true if `category` was named at least once.
    #[must_use]
    pub const fn touched(&self, category: Category) -> bool {
        match category {
            Category::Links => self.links.is_some(),
            Category::Match => self.matching.is_some(),
            Category::Local => self.local.is_some(),
            Category::Remote => self.remote.is_some(),
        }
    }
}

fn combine(slot: Option<MatchFlags>, value: Match) -> MatchFlags {
    slot.unwrap_or_else(MatchFlags::empty) | value.flags()
}

fn last_wins<T>(slot: &mut Option<T>, value: T)
where
    T: Copy + PartialEq + Into<WantValue>,
{
    if let Some(previous) = *slot {
        if previous != value {
            let (old, new): (WantValue, WantValue) = (previous.into(), value.into());
            tracing::debug!(
                category = %new.category(),
                previous = old.name(),
                value = new.name(),
                "Overriding earlier option value"
            );
        }
    }
    *slot = Some(value);
}

fn reject_differing<T>(slot: &mut Option<T>, value: T) -> Result<(), WantError>
where
    T: Copy + PartialEq + Into<WantValue>,
{
    match *slot {
        Some(previous) if previous != value => {
            let (first, second): (WantValue, WantValue) = (previous.into(), value.into());
            Err(WantError::Conflict {
                category: first.category(),
                first,
                second,
            })
        }
        _ => {
            *slot = Some(value);
            Ok(())
        }
    }
}
