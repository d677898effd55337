//! Interactive form session example.
//!
//! Replays the edits a user makes while filling in the card form and prints
//! what the renderer would show after each step.
//!
//! Run with: `RUST_LOG=card_form=debug cargo run --example form`

use card_form::{ErrorMessages, ErrorTag, FieldKind, PaymentForm};
use tracing_subscriber::EnvFilter;

fn show(form: &PaymentForm) {
    let view = form.view();
    println!("  Card:   {}", view.card_number);
    println!("  Name:   {}", view.card_holder_name);
    println!("  Expiry: {}/{}", view.card_expiry_month, view.card_expiry_year);

    for kind in FieldKind::ALL {
        if !form.field(kind).is_interacted() {
            continue;
        }
        if let Some(message) = form.error_message(kind, &ErrorMessages::for_field(kind)) {
            println!("  ! {}: {}", kind, message);
        }
    }

    println!("  Submit enabled: {}", view.form_valid);
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Payment Card Form ===\n");

    let mut form = PaymentForm::new();
    let years = form.year_range();
    println!("Accepted expiry years: {}\n", years);

    println!("--- Fresh form ---\n");
    show(&form);

    // -------------------------------------------------------------------------
    // Typing the card number
    // -------------------------------------------------------------------------
    println!("--- Typing the card number ---\n");

    for partial in ["4111", "41111111", "411111111111111", "4111111111111111"] {
        form.input(FieldKind::Number, partial);
        println!("  {:<16} -> {:?}", partial, form.first_error(FieldKind::Number));
    }
    form.mark_touched(FieldKind::Number);
    println!();

    // -------------------------------------------------------------------------
    // The remaining fields, with a mistake in the year
    // -------------------------------------------------------------------------
    println!("--- Remaining fields ---\n");

    form.input(FieldKind::Name, "Jane Doe");
    form.input(FieldKind::Month, "7");
    form.input(FieldKind::Year, &(years.min() - 1).to_string());
    form.input(FieldKind::Cvv, "123");
    show(&form);

    // -------------------------------------------------------------------------
    // Custom messages
    // -------------------------------------------------------------------------
    println!("--- Custom messages ---\n");

    let messages = ErrorMessages::new()
        .with(ErrorTag::Pattern, "Use two digits, e.g. 07")
        .with(ErrorTag::Range, format!("Choose a year between {}", years));

    for kind in [FieldKind::Month, FieldKind::Year] {
        if let Some(message) = form.error_message(kind, &messages) {
            println!("  {}: {}", kind, message);
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // Fixing the mistakes
    // -------------------------------------------------------------------------
    println!("--- After corrections ---\n");

    form.input(FieldKind::Month, "07");
    form.input(FieldKind::Year, &years.max().to_string());
    form.mark_all_touched();
    show(&form);

    println!("Debug output never shows card data:\n  {:?}", form.field(FieldKind::Number));
}
