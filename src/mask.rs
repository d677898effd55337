//! Masking of sensitive field values.
//!
//! Card numbers and CVVs typed into the form must never reach logs or
//! `Debug` output in clear text. Everything that prints a field value goes
//! through [`mask_value`].
//!
//! - Card number: only the last 4 characters survive, and only once at
//!   least 12 characters have been entered (`****-****-****-1111`)
//! - CVV: fully masked (`***`)
//! - Other fields: unchanged

use crate::field::FieldKind;

/// Minimum card number length before the last four characters are shown.
const REVEAL_THRESHOLD: usize = 12;

/// Masks a field value according to the field's sensitivity.
///
/// # Example
///
/// ```
/// use card_form::{mask::mask_value, FieldKind};
///
/// assert_eq!(mask_value(FieldKind::Number, "4111111111111111"), "****-****-****-1111");
/// assert_eq!(mask_value(FieldKind::Cvv, "123"), "***");
/// assert_eq!(mask_value(FieldKind::Month, "07"), "07");
/// ```
pub fn mask_value(kind: FieldKind, value: &str) -> String {
    match kind {
        FieldKind::Number => mask_card_number(value),
        FieldKind::Cvv => "*".repeat(value.chars().count()),
        FieldKind::Name | FieldKind::Month | FieldKind::Year => value.to_string(),
    }
}

/// Masks a raw card number string, grouping mask characters in fours.
///
/// Partial input shorter than 12 characters is masked entirely.
pub fn mask_card_number(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();

    let visible = if len >= REVEAL_THRESHOLD { 4 } else { 0 };
    let masked_count = len - visible;

    let mut result = String::with_capacity(len + (len / 4));

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    if visible > 0 {
        if masked_count % 4 == 0 {
            result.push('-');
        }
        result.extend(&chars[masked_count..]);
    }

    result
}
