//! Error types for layout validation and value parsing.

use thiserror::Error;

use super::value::Category;

/// A structural defect in a bit-field table.
///
/// The production layout is checked at compile time; this type reports the
/// same defects for tables validated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A field extends past the integer's bit capacity.
    #[error("Field #{index} ends at bit {end}, beyond the {capacity}-bit capacity")]
    Overflow {
        /// Position of the field in the table
        index: usize,
        /// First bit past the field
        end: u32,
        /// Available bits
        capacity: u32,
    },

    /// Two fields share at least one bit.
    #[error("Fields #{first} and #{second} overlap")]
    Overlap {
        /// Position of the earlier field in the table
        first: usize,
        /// Position of the later field in the table
        second: usize,
    },
}

/// Error parsing a textual `category=value` token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseValueError {
    /// Token is not of the form `category=value`.
    #[error("Malformed option '{0}': expected 'category=value'")]
    Malformed(String),

    /// Category name is not one of links, match, local, remote.
    #[error("Unknown category '{0}': expected links, match, local, or remote")]
    UnknownCategory(String),

    /// Value is not legal for the category.
    #[error("Unknown value '{value}' for category {category}")]
    UnknownValue {
        /// Category the value was given for
        category: Category,
        /// The rejected value
        value: String,
    },
}
