//! Error types for encoding options.

use thiserror::Error;

use crate::layout::{Category, ParseValueError, WantValue};

/// Error building a packed options value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WantError {
    /// Two different values were requested for the same category.
    ///
    /// Only raised by strict encoding; lenient encoding keeps the last value.
    #[error("Conflicting {category} options: '{first}' and '{second}'")]
    Conflict {
        /// Category both values belong to
        category: Category,
        /// Value seen first
        first: WantValue,
        /// Value that conflicts with it
        second: WantValue,
    },

    /// A textual option could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseValueError),
}
