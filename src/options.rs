//! Form construction options.
//!
//! ```
//! use card_form::{FormOptions, PaymentForm};
//!
//! let form = PaymentForm::with_options(
//!     FormOptions::default()
//!         .current_year(2024)
//!         .year_span(5)
//!         .name_placeholder("Name on card"),
//! );
//!
//! assert_eq!(form.year_range().max(), 2029);
//! assert_eq!(form.display_name(), "Name on card");
//! ```

use crate::expiry::{YearRange, DEFAULT_YEAR_SPAN};

/// Placeholder shown in place of an empty cardholder name.
pub const DEFAULT_NAME_PLACEHOLDER: &str = "Card Holder Name";

/// Settings fixed at form construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct FormOptions {
    /// Year the expiry range starts at. `None` reads the system clock.
    pub current_year: Option<u16>,
    /// How many years past the current one are accepted.
    pub year_span: u16,
    /// Text returned by `display_name` while the name field is empty.
    pub name_placeholder: String,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            current_year: None,
            year_span: DEFAULT_YEAR_SPAN,
            name_placeholder: DEFAULT_NAME_PLACEHOLDER.to_string(),
        }
    }
}

impl FormOptions {
    /// Pins the current year instead of reading the clock.
    pub fn current_year(mut self, year: u16) -> Self {
        self.current_year = Some(year);
        self
    }

    /// Sets how many years ahead are accepted.
    pub fn year_span(mut self, span: u16) -> Self {
        self.year_span = span;
        self
    }

    /// Sets the empty-name placeholder.
    pub fn name_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.name_placeholder = placeholder.into();
        self
    }

    /// Resolves the accepted expiry years.
    pub fn year_range(&self) -> YearRange {
        match self.current_year {
            Some(year) => YearRange::starting_at(year, self.year_span),
            None => YearRange::current(self.year_span),
        }
    }
}
