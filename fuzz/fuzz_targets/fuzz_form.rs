//! Fuzz target for form editing.
//!
//! Replays arbitrary edit sequences and checks that queries never panic and
//! that the form's invariants hold after every step.

#![no_main]

use arbitrary::Arbitrary;
use card_form::{ErrorTag, FieldKind, PaymentForm};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Edit {
    Set(u8, String),
    Input(u8, String),
    Touch(u8),
    Dirty(u8),
}

#[derive(Debug, Arbitrary)]
struct Session {
    current_year: u16,
    edits: Vec<Edit>,
}

fn kind(index: u8) -> FieldKind {
    FieldKind::ALL[index as usize % FieldKind::ALL.len()]
}

fuzz_target!(|session: Session| {
    let mut form = PaymentForm::with_current_year(session.current_year);

    for edit in session.edits {
        match edit {
            Edit::Set(i, value) => form.set_value(kind(i), &value),
            Edit::Input(i, value) => form.input(kind(i), &value),
            Edit::Touch(i) => form.mark_touched(kind(i)),
            Edit::Dirty(i) => form.mark_dirty(kind(i)),
        }

        for kind in FieldKind::ALL {
            let error = form.first_error(kind);
            assert_eq!(form.is_valid(kind), error.is_none());
            if form.value(kind).is_empty() {
                assert_eq!(error, Some(ErrorTag::Required));
            }
            if error == Some(ErrorTag::Range) {
                assert_eq!(kind, FieldKind::Year);
            }
        }

        if form.is_form_valid() {
            assert!(form.errors().next().is_none());
        }

        let _ = form.view();
        let _ = format!("{:?}", form);
    }
});
