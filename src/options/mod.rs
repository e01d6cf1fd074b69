//! Options codec: encoding explicit values into a packed [`Want`] and
//! decoding it back.
//!
//! This module provides:
//! - The explicit-request set and its per-category reducers ([`Explicit`], [`MergeMode`])
//! - The ordered implication rule table ([`RULES`], [`resolve`])
//! - The packed value with decode accessors ([`Want`], [`WantBuilder`])
//! - A serializable decoded view ([`DecodedView`])
//!
//! # Encoding
//!
//! 1. Values are folded per category: match values OR their bits, other
//!    categories keep the last value (lenient) or reject a differing one (strict).
//! 2. Untouched categories are filled by [`RULES`], whose conditions depend on
//!    which other categories were touched and to what.
//! 3. Every value is written into its field; unused bits stay zero.
//!
//! The result depends only on the folded per-category values, never on the
//! order in which values were supplied.

mod error;
mod explicit;
mod packed;
mod rules;
mod view;

#[cfg(test)]
mod explicit_tests;

pub use error::WantError;
pub use explicit::{Explicit, MergeMode};
pub use packed::{Want, WantBuilder};
pub use rules::{RULES, Resolved, Rule, resolve};
pub use view::DecodedView;

/// Encodes a mix of category values leniently.
///
/// Accepts anything convertible into [`WantValue`](crate::layout::WantValue).
///
/// ```
/// use want::{want, Links, Local, Match, Remote};
///
/// let image = want!(Local::Uri, Remote::Uri, Links::None);
/// assert!(!image.links());
///
/// assert_eq!(want!(Match::Completion, Match::Loose), want!(Match::Loose, Match::Completion));
/// assert_eq!(want!(), want::Want::default());
/// ```
#[macro_export]
macro_rules! want {
    () => {
        $crate::Want::from_values(::core::iter::empty::<$crate::layout::WantValue>())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Want::from_values([$($crate::layout::WantValue::from($value)),+])
    };
}
