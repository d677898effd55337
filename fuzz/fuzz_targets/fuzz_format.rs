//! Fuzz target for display formatting.
//!
//! Tests that numeric interpretation and formatting never panic on
//! arbitrary input.

#![no_main]

use card_form::{format, mask, FieldKind};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let value = format::numeric_value(data);

    let number = format::format_card_number(value);
    let expiry = format::format_expiry_date(value);

    if value.is_none() {
        assert_eq!(number, format::NOT_A_NUMBER);
        assert_eq!(expiry, format::NOT_A_NUMBER);
    }

    // Stripping then grouping keeps every digit.
    let digits = format::strip_formatting(data);
    let grouped = format::group_digits(&digits, 4, " ");
    assert_eq!(format::strip_formatting(&grouped), digits);

    for kind in FieldKind::ALL {
        let _ = mask::mask_value(kind, data);
    }
});
