//! Layout registry for packed options.
//!
//! This module provides:
//! - Bit ranges and table checks ([`BitField`], [`validate`])
//! - The fixed category table ([`LAYOUT`], [`width_of`], [`offset_of`])
//! - Categories and their values ([`Category`], [`WantValue`])
//! - Value/bit conversion ([`value_to_bits`], [`bits_to_value`])
//!
//! The table is constant for the process lifetime and is checked for
//! overflow and overlap at compile time.

mod error;
mod field;
mod registry;
mod value;

#[cfg(test)]
mod registry_tests;
#[cfg(test)]
mod value_tests;

pub use error::{LayoutError, ParseValueError};
pub use field::{BitField, CAPACITY, disjoint, fits, validate};
pub use registry::{
    LAYOUT, LINKS, LOCAL, MATCH, REMOTE, bits_to_value, field_of, offset_of, used_mask,
    value_to_bits, width_of,
};
pub use value::{Category, Links, Local, Match, MatchFlags, Remote, WantValue};
