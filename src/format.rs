//! Display formatting for field values.
//!
//! The form does not decide how values look on screen. It hands the
//! *numeric* interpretation of a raw value to a [`DisplayFormatter`] and
//! shows whatever comes back. [`DefaultFormatter`] is provided for hosts
//! that have no formatter of their own.
//!
//! # Numeric interpretation
//!
//! [`numeric_value`] reads a raw value the way the rendering layer has
//! always read it:
//!
//! - surrounding whitespace is ignored
//! - an empty value is `0`
//! - a run of ASCII digits is its decimal value
//! - anything else is not a number (`None`), which formatters render as `NaN`
//!
//! # Example
//!
//! ```
//! use card_form::format::{format_card_number, format_expiry_date, numeric_value};
//!
//! assert_eq!(format_card_number(numeric_value("4111111111111111")), "4111 1111 1111 1111");
//! assert_eq!(format_expiry_date(numeric_value("7")), "07");
//! assert_eq!(format_expiry_date(numeric_value("July")), "NaN");
//! ```

/// What formatters print for a value that is not a number.
pub const NOT_A_NUMBER: &str = "NaN";

/// Turns numbers into display strings.
///
/// Implement this to plug in host-specific presentation. `None` means the
/// raw value had no numeric interpretation.
pub trait DisplayFormatter {
    /// Formats a card number.
    fn format_card_number(&self, value: Option<u64>) -> String;

    /// Formats one component (month or year) of an expiry date.
    fn format_expiry_date(&self, value: Option<u64>) -> String;
}

/// Groups card digits in fours and zero-pads expiry components to two
/// digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultFormatter {
    separator: String,
}

impl DefaultFormatter {
    /// Creates a formatter that separates digit groups with a space.
    pub fn new() -> Self {
        Self::with_separator(" ")
    }

    /// Creates a formatter with a custom digit-group separator.
    ///
    /// ```
    /// use card_form::format::{DefaultFormatter, DisplayFormatter};
    ///
    /// let formatter = DefaultFormatter::with_separator("-");
    /// assert_eq!(formatter.format_card_number(Some(4111111111111111)), "4111-1111-1111-1111");
    /// ```
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// The separator placed between digit groups.
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for DefaultFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayFormatter for DefaultFormatter {
    fn format_card_number(&self, value: Option<u64>) -> String {
        match value {
            Some(n) => group_digits(&n.to_string(), 4, &self.separator),
            None => NOT_A_NUMBER.to_string(),
        }
    }

    fn format_expiry_date(&self, value: Option<u64>) -> String {
        match value {
            Some(n) => format!("{:02}", n),
            None => NOT_A_NUMBER.to_string(),
        }
    }
}

/// Interprets a raw field value as a number.
///
/// Returns `None` for anything that is not a plain run of ASCII digits, or
/// that does not fit in a `u64`.
pub fn numeric_value(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Some(0);
    }

    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    trimmed.parse().ok()
}

/// Formats a card number with [`DefaultFormatter`].
#[inline]
pub fn format_card_number(value: Option<u64>) -> String {
    DefaultFormatter::new().format_card_number(value)
}

/// Formats an expiry component with [`DefaultFormatter`].
#[inline]
pub fn format_expiry_date(value: Option<u64>) -> String {
    DefaultFormatter::new().format_expiry_date(value)
}

/// Splits a string of digits into groups of `size`, joined by `separator`.
///
/// The last group holds any remainder.
///
/// ```
/// use card_form::format::group_digits;
///
/// assert_eq!(group_digits("411111", 4, " "), "4111 11");
/// ```
pub fn group_digits(digits: &str, size: usize, separator: &str) -> String {
    let size = size.max(1);
    let count = digits.chars().count();
    let mut result = String::with_capacity(digits.len() + (count / size) * separator.len());

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % size == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }

    result
}

/// Strips everything but ASCII digits.
///
/// Useful for normalising pasted card numbers (`4111 1111 1111 1111`)
/// before they are entered into the form.
///
/// ```
/// use card_form::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
