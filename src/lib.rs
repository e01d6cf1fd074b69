//! Want: link-resolution option packing
//!
//! A library for packing link-resolution options (link rendering, match
//! strictness, local and remote resolution) into a single integer, with
//! cross-category defaults, and for decoding that integer back.

pub mod config;
pub mod layout;
pub mod options;
pub mod profile;

pub use layout::{Category, Links, Local, Match, Remote, WantValue};
pub use options::{DecodedView, MergeMode, Want, WantBuilder, WantError};
