//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use card_form::{format, mask, ErrorTag, FieldKind, PaymentForm};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn field_kind() -> impl Strategy<Value = FieldKind> {
    prop_oneof![
        Just(FieldKind::Number),
        Just(FieldKind::Name),
        Just(FieldKind::Month),
        Just(FieldKind::Year),
        Just(FieldKind::Cvv),
    ]
}

/// Generates a random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a random digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

// =============================================================================
// FIELD RULE PROPERTIES
// =============================================================================

proptest! {
    /// Property: Any 16-digit string is a valid card number.
    #[test]
    fn sixteen_digits_always_valid(number in digit_string(16)) {
        let mut form = PaymentForm::with_current_year(2024);
        form.set_value(FieldKind::Number, &number);
        prop_assert!(form.is_valid(FieldKind::Number));
    }

    /// Property: Digit strings of any other length fail the pattern.
    #[test]
    fn other_lengths_fail_pattern(
        number in digit_string_range(1..=32).prop_filter("not 16", |s| s.len() != 16)
    ) {
        let mut form = PaymentForm::with_current_year(2024);
        form.set_value(FieldKind::Number, &number);
        prop_assert_eq!(form.first_error(FieldKind::Number), Some(ErrorTag::Pattern));
    }

    /// Property: Only 3-digit CVVs pass.
    #[test]
    fn cvv_length(cvv in digit_string_range(1..=6)) {
        let mut form = PaymentForm::with_current_year(2024);
        form.set_value(FieldKind::Cvv, &cvv);
        prop_assert_eq!(form.is_valid(FieldKind::Cvv), cvv.len() == 3);
    }

    /// Property: Two-digit months are valid exactly when 1..=12.
    #[test]
    fn month_range(month in 0u32..100) {
        let mut form = PaymentForm::with_current_year(2024);
        form.set_value(FieldKind::Month, &format!("{:02}", month));
        prop_assert_eq!(form.is_valid(FieldKind::Month), (1..=12).contains(&month));
    }

    /// Property: Four-digit years fail only with Range, and only outside the window.
    #[test]
    fn year_window(current in 1000u16..9000, year in 1000u16..=9999) {
        let mut form = PaymentForm::with_current_year(current);
        form.set_value(FieldKind::Year, &year.to_string());

        let in_window = current <= year && year <= current + 3;
        let expected = if in_window { None } else { Some(ErrorTag::Range) };
        prop_assert_eq!(form.first_error(FieldKind::Year), expected);
    }

    /// Property: Range is only ever reported for well-formed years.
    #[test]
    fn range_implies_four_digits(value in "\\PC{0,8}") {
        let mut form = PaymentForm::with_current_year(2024);
        form.set_value(FieldKind::Year, &value);
        if form.first_error(FieldKind::Year) == Some(ErrorTag::Range) {
            prop_assert_eq!(value.len(), 4);
            prop_assert!(value.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    /// Property: Empty always means Required, non-empty never does.
    #[test]
    fn required_iff_empty(kind in field_kind(), value in "\\PC{0,20}") {
        let mut form = PaymentForm::with_current_year(2024);
        form.set_value(kind, &value);
        let required = form.first_error(kind) == Some(ErrorTag::Required);
        prop_assert_eq!(required, value.is_empty());
    }

    /// Property: Validity and first error always agree.
    #[test]
    fn validity_matches_first_error(kind in field_kind(), value in "\\PC{0,20}") {
        let mut form = PaymentForm::with_current_year(2024);
        form.set_value(kind, &value);
        prop_assert_eq!(form.is_valid(kind), form.first_error(kind).is_none());
    }

    /// Property: Setting the same value twice changes nothing.
    #[test]
    fn set_value_idempotent(kind in field_kind(), value in "\\PC{0,20}") {
        let mut form = PaymentForm::with_current_year(2024);
        form.set_value(kind, &value);
        let first = (form.is_valid(kind), form.first_error(kind), form.view());
        form.set_value(kind, &value);
        let second = (form.is_valid(kind), form.first_error(kind), form.view());
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// FORM STATE PROPERTIES
// =============================================================================

proptest! {
    /// Property: A form with any field never interacted with is not valid.
    #[test]
    fn untouched_field_blocks_form(
        skipped in field_kind(),
        touch in proptest::bool::ANY,
    ) {
        let mut form = PaymentForm::with_current_year(2024);
        for (kind, value) in [
            (FieldKind::Number, "4111111111111111"),
            (FieldKind::Name, "Jane Doe"),
            (FieldKind::Month, "07"),
            (FieldKind::Year, "2026"),
            (FieldKind::Cvv, "123"),
        ] {
            form.set_value(kind, value);
            if kind != skipped {
                if touch {
                    form.mark_touched(kind);
                } else {
                    form.mark_dirty(kind);
                }
            }
        }
        prop_assert!(!form.is_form_valid());
    }
}

// =============================================================================
// FORMATTING PROPERTIES
// =============================================================================

proptest! {
    /// Property: Formatting a digit string keeps all digits, minus leading zeros.
    #[test]
    fn formatted_number_keeps_digits(number in digit_string_range(1..=19)) {
        let formatted = format::format_card_number(format::numeric_value(&number));
        let expected = number.trim_start_matches('0');
        let expected = if expected.is_empty() { "0" } else { expected };
        prop_assert_eq!(format::strip_formatting(&formatted), expected);
    }

    /// Property: Expiry components are at least two characters.
    #[test]
    fn expiry_is_padded(n in 0u64..10_000) {
        let formatted = format::format_expiry_date(Some(n));
        prop_assert!(formatted.len() >= 2);
        prop_assert_eq!(formatted.parse::<u64>().unwrap(), n);
    }

    /// Property: Anything with a non-digit inside formats as NaN.
    #[test]
    fn non_digits_format_as_nan(prefix in digit_string_range(0..=4), suffix in "[a-zA-Z/.-]{1,4}") {
        let raw = format!("{}{}", prefix, suffix);
        prop_assert_eq!(format::format_card_number(format::numeric_value(&raw)), "NaN");
    }
}

// =============================================================================
// MASKING PROPERTIES
// =============================================================================

proptest! {
    /// Property: A masked card number never contains its first 12 digits.
    #[test]
    fn masked_number_hides_prefix(number in digit_string(16)) {
        let masked = mask::mask_value(FieldKind::Number, &number);
        prop_assert!(!masked.contains(&number[..12]));
        prop_assert!(masked.ends_with(&number[12..]));
    }

    /// Property: Masked CVVs contain no digits.
    #[test]
    fn masked_cvv_has_no_digits(cvv in digit_string_range(0..=4)) {
        let masked = mask::mask_value(FieldKind::Cvv, &cvv);
        prop_assert!(!masked.chars().any(|c| c.is_ascii_digit()));
        prop_assert_eq!(masked.len(), cvv.len());
    }
}
