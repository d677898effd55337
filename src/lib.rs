//! # card_form
//!
//! Payment card entry form with client-side validation for Rust.
//!
//! ## Features
//!
//! - Five fixed fields: card number, holder name, expiry month, expiry year, CVV
//! - Ordered validation rules with a single, first-match error per field
//! - Touched/dirty tracking so untouched forms are never reported as valid
//! - Pluggable display formatting for the card preview
//! - Caller-supplied error message tables
//! - Interfaces: library, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use card_form::{ErrorTag, FieldKind, PaymentForm};
//!
//! let mut form = PaymentForm::with_current_year(2024);
//!
//! form.input(FieldKind::Number, "411111111111111");
//! assert_eq!(form.first_error(FieldKind::Number), Some(ErrorTag::Pattern));
//! assert_eq!(form.card_number_error().as_deref(), Some("Invalid Card Number"));
//!
//! form.input(FieldKind::Number, "4111111111111111");
//! assert!(form.is_valid(FieldKind::Number));
//! assert_eq!(form.card_number(), "4111 1111 1111 1111");
//! ```
//!
//! ## Field Rules
//!
//! | Field | Pattern | Extra |
//! |-------|---------|-------|
//! | number | exactly 16 digits | |
//! | name | letters and whitespace | |
//! | month | `01`-`12` | |
//! | year | exactly 4 digits | current year to current year + 3 |
//! | cvv | exactly 3 digits | |
//!
//! Every field is required. An empty field reports [`ErrorTag::Required`],
//! a malformed one [`ErrorTag::Pattern`], and a well-formed year outside the
//! accepted window [`ErrorTag::Range`].
//!
//! ## Form Validity
//!
//! ```rust
//! use card_form::{FieldKind, PaymentForm};
//!
//! let mut form = PaymentForm::with_current_year(2024);
//! form.set_value(FieldKind::Number, "4111111111111111");
//! form.set_value(FieldKind::Name, "Jane Doe");
//! form.set_value(FieldKind::Month, "07");
//! form.set_value(FieldKind::Year, "2026");
//! form.set_value(FieldKind::Cvv, "123");
//!
//! // All values pass, but nobody has touched the form yet.
//! assert!(!form.is_form_valid());
//!
//! form.mark_all_touched();
//! assert!(form.is_form_valid());
//! ```
//!
//! ## Error Messages
//!
//! ```rust
//! use card_form::{ErrorMessages, ErrorTag, FieldKind, PaymentForm};
//!
//! let mut form = PaymentForm::with_current_year(2024);
//! form.input(FieldKind::Year, "2031");
//!
//! let messages = ErrorMessages::new()
//!     .with(ErrorTag::Required, "Enter the expiry year")
//!     .with(ErrorTag::Range, "Year must be 2024-2027");
//!
//! assert_eq!(
//!     form.error_message(FieldKind::Year, &messages),
//!     Some("Year must be 2024-2027")
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | (De)serialize views, options and message tables |
//! | `wasm` | WebAssembly bindings |
//!
//! ## Security
//!
//! - Raw field values are zeroized when replaced and when the form is dropped
//! - `Debug` output and log events mask card number and CVV
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
pub mod expiry;
pub mod field;
pub mod form;
pub mod format;
pub mod mask;
pub mod messages;
pub mod options;
pub mod rule;
pub mod view;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use error::FormError;
pub use expiry::YearRange;
pub use field::{Field, FieldKind};
pub use form::PaymentForm;
pub use format::{DefaultFormatter, DisplayFormatter};
pub use messages::ErrorMessages;
pub use options::FormOptions;
pub use rule::{ErrorTag, Rule};
pub use view::FormView;
