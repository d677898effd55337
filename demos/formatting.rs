//! Card preview formatting example.
//!
//! Run with: `cargo run --example formatting`

use card_form::format::{self, DefaultFormatter, DisplayFormatter};
use card_form::{FieldKind, PaymentForm};

/// A formatter that shows only the last four digits on the preview.
struct LastFour;

impl DisplayFormatter for LastFour {
    fn format_card_number(&self, value: Option<u64>) -> String {
        match value {
            Some(n) => format!("•••• {:04}", n % 10_000),
            None => String::from("••••"),
        }
    }

    fn format_expiry_date(&self, value: Option<u64>) -> String {
        DefaultFormatter::new().format_expiry_date(value)
    }
}

fn main() {
    println!("=== Card Preview Formatting ===\n");

    // -------------------------------------------------------------------------
    // Numeric interpretation
    // -------------------------------------------------------------------------
    println!("--- Numeric interpretation ---\n");

    for raw in ["4111111111111111", "07", " 12 ", "", "July", "4111-1111"] {
        println!("  {:<20} -> {:?}", format!("{:?}", raw), format::numeric_value(raw));
    }
    println!();

    // -------------------------------------------------------------------------
    // Default formatter
    // -------------------------------------------------------------------------
    println!("--- Default formatter ---\n");

    let separators = [" ", "-", " - "];
    for sep in separators {
        let formatter = DefaultFormatter::with_separator(sep);
        println!(
            "  Separator {:<5} {}",
            format!("'{}':", sep),
            formatter.format_card_number(Some(4_111_111_111_111_111))
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // Pasted input
    // -------------------------------------------------------------------------
    println!("--- Normalising pasted input ---\n");

    let mut form = PaymentForm::new();
    for pasted in ["4111 1111 1111 1111", "4111-1111-1111-1111", "4111.1111.1111.1111"] {
        form.input(FieldKind::Number, pasted);
        let before = form.first_error(FieldKind::Number);

        form.input(FieldKind::Number, &format::strip_formatting(pasted));
        let after = form.first_error(FieldKind::Number);

        println!("  {:<22} {:?} -> {:?}", pasted, before, after);
    }
    println!();

    // -------------------------------------------------------------------------
    // Custom formatter
    // -------------------------------------------------------------------------
    println!("--- Custom formatter ---\n");

    form.input(FieldKind::Month, "3");
    form.input(FieldKind::Year, &form.year_range().min().to_string());

    println!("  Default:   {}", form.formatted_number());
    println!("  Last four: {}", form.formatted_number_with(&LastFour));
    println!(
        "  Expiry:    {}/{}",
        form.formatted_month_with(&LastFour),
        form.formatted_year_with(&LastFour)
    );
}
