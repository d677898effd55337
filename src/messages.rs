//! Human-readable error messages.
//!
//! The form reports failures as [`ErrorTag`]s. Turning a tag into text is
//! the caller's business: an [`ErrorMessages`] table maps tags to strings,
//! and a tag with no entry produces no message.
//!
//! [`ErrorMessages::for_field`] returns the stock tables used by the
//! rendering getters on [`PaymentForm`](crate::PaymentForm).
//!
//! # Example
//!
//! ```
//! use card_form::{ErrorMessages, ErrorTag};
//!
//! let messages = ErrorMessages::new()
//!     .with(ErrorTag::Required, "Please enter a year")
//!     .with(ErrorTag::Range, "Card is expired or too far out");
//!
//! assert_eq!(messages.get(ErrorTag::Range), Some("Card is expired or too far out"));
//! assert_eq!(messages.get(ErrorTag::Pattern), None);
//! ```

use crate::field::FieldKind;
use crate::rule::ErrorTag;
use std::collections::BTreeMap;

/// A table from error tags to messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ErrorMessages {
    entries: BTreeMap<ErrorTag, String>,
}

impl ErrorMessages {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table that maps every tag to the same message.
    pub fn uniform(message: &str) -> Self {
        ErrorTag::ALL
            .into_iter()
            .fold(Self::new(), |table, tag| table.with(tag, message))
    }

    /// Adds an entry, returning the table.
    pub fn with(mut self, tag: ErrorTag, message: impl Into<String>) -> Self {
        self.insert(tag, message);
        self
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, tag: ErrorTag, message: impl Into<String>) {
        self.entries.insert(tag, message.into());
    }

    /// Looks up the message for a tag.
    #[inline]
    pub fn get(&self, tag: ErrorTag) -> Option<&str> {
        self.entries.get(&tag).map(String::as_str)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The stock message table for a field.
    ///
    /// | Field | Message | Tags |
    /// |-------|---------|------|
    /// | number | Invalid Card Number | required, pattern |
    /// | name | Invalid Cardholder Name | required, pattern |
    /// | month | Invalid Month | required, pattern |
    /// | year | Invalid Year | required, pattern, range |
    /// | cvv | Invalid CVV/CVC | required, pattern |
    pub fn for_field(kind: FieldKind) -> Self {
        let message = stock_message(kind);
        let table = Self::new()
            .with(ErrorTag::Required, message)
            .with(ErrorTag::Pattern, message);

        match kind {
            FieldKind::Year => table.with(ErrorTag::Range, message),
            _ => table,
        }
    }
}

impl<S: Into<String>> FromIterator<(ErrorTag, S)> for ErrorMessages {
    fn from_iter<I: IntoIterator<Item = (ErrorTag, S)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(tag, msg)| (tag, msg.into())).collect(),
        }
    }
}

const fn stock_message(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Number => "Invalid Card Number",
        FieldKind::Name => "Invalid Cardholder Name",
        FieldKind::Month => "Invalid Month",
        FieldKind::Year => "Invalid Year",
        FieldKind::Cvv => "Invalid CVV/CVC",
    }
}
