//! Error types for form API misuse.
//!
//! Validation failures are not errors: they are reported as
//! [`ErrorTag`](crate::ErrorTag) values. `FormError` only covers calls that
//! cannot be answered at all, such as asking for a field the form does not
//! have.

use std::fmt;

/// Errors returned by the form API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The requested field name is not one of the form's fixed keys.
    InvalidFieldKind {
        /// The name that was looked up.
        name: String,
    },

    /// The name is not one of the error tags (`required`, `pattern`, `range`).
    InvalidErrorTag {
        /// The name that was parsed.
        name: String,
    },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFieldKind { name } => {
                write!(
                    f,
                    "unknown field '{}' (expected one of: number, name, month, year, cvv)",
                    name.escape_default()
                )
            }
            Self::InvalidErrorTag { name } => {
                write!(
                    f,
                    "unknown error tag '{}' (expected one of: required, pattern, range)",
                    name.escape_default()
                )
            }
        }
    }
}

impl std::error::Error for FormError {}
