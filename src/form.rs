//! The payment card form.
//!
//! [`PaymentForm`] owns the five fields of a card entry form and answers
//! every question a renderer needs: is this field valid, what is its first
//! error, is the whole form ready, and what should be displayed.
//!
//! Nothing is cached. Validity is recomputed from the current values on
//! every call.
//!
//! # Example
//!
//! ```
//! use card_form::{ErrorTag, FieldKind, PaymentForm};
//!
//! let mut form = PaymentForm::with_current_year(2024);
//!
//! form.input(FieldKind::Number, "4111111111111111");
//! form.input(FieldKind::Name, "Jane Doe");
//! form.input(FieldKind::Month, "07");
//! form.input(FieldKind::Year, "2020");
//! form.input(FieldKind::Cvv, "123");
//!
//! assert_eq!(form.first_error(FieldKind::Year), Some(ErrorTag::Range));
//! assert!(!form.is_form_valid());
//!
//! form.input(FieldKind::Year, "2026");
//! assert!(form.is_form_valid());
//! assert_eq!(form.card_number(), "4111 1111 1111 1111");
//! ```

use crate::error::FormError;
use crate::expiry::YearRange;
use crate::field::{Field, FieldKind};
use crate::format::{numeric_value, DefaultFormatter, DisplayFormatter};
use crate::messages::ErrorMessages;
use crate::options::FormOptions;
use crate::rule::{default_rules, ErrorTag};
use crate::view::FormView;
use std::fmt;
use tracing::{debug, trace};

/// A card entry form with a fixed set of fields.
#[derive(Clone)]
pub struct PaymentForm {
    fields: [Field; 5],
    years: YearRange,
    name_placeholder: String,
}

impl PaymentForm {
    /// Creates an empty form whose expiry range starts at this year.
    pub fn new() -> Self {
        Self::with_options(FormOptions::default())
    }

    /// Creates an empty form as if the current year were `year`.
    pub fn with_current_year(year: u16) -> Self {
        Self::with_options(FormOptions::default().current_year(year))
    }

    /// Creates an empty form from explicit options.
    pub fn with_options(options: FormOptions) -> Self {
        let years = options.year_range();
        let fields = FieldKind::ALL.map(|kind| Field::new(kind, default_rules(kind, years)));

        debug!(min_year = years.min(), max_year = years.max(), "payment form created");

        Self {
            fields,
            years,
            name_placeholder: options.name_placeholder,
        }
    }

    /// The accepted expiry years.
    #[inline]
    pub const fn year_range(&self) -> YearRange {
        self.years
    }

    /// Borrows a field.
    #[inline]
    pub fn field(&self, kind: FieldKind) -> &Field {
        &self.fields[kind.index()]
    }

    #[inline]
    fn field_mut(&mut self, kind: FieldKind) -> &mut Field {
        &mut self.fields[kind.index()]
    }

    /// Borrows a field by key.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidFieldKind`] if `name` is not one of the form's keys.
    pub fn field_by_name(&self, name: &str) -> Result<&Field, FormError> {
        let kind: FieldKind = name.parse()?;
        Ok(self.field(kind))
    }

    /// Iterates over all fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Stores a raw value without validating it or touching any flag.
    pub fn set_value(&mut self, kind: FieldKind, value: &str) {
        let field = self.field_mut(kind);
        field.set_value(value);
        debug!(field = %kind, value = %field.masked_value(), "value set");
    }

    /// Records a user edit: stores the value and marks the field dirty.
    pub fn input(&mut self, kind: FieldKind, value: &str) {
        self.set_value(kind, value);
        self.mark_dirty(kind);
    }

    /// Marks a field as touched (the user focused and left it).
    pub fn mark_touched(&mut self, kind: FieldKind) {
        if self.field_mut(kind).mark_touched() {
            debug!(field = %kind, "field touched");
        }
    }

    /// Marks a field as dirty (the user changed its value).
    pub fn mark_dirty(&mut self, kind: FieldKind) {
        if self.field_mut(kind).mark_dirty() {
            debug!(field = %kind, "field dirty");
        }
    }

    /// Marks every field as touched, e.g. when the user tries to submit.
    pub fn mark_all_touched(&mut self) {
        for kind in FieldKind::ALL {
            self.mark_touched(kind);
        }
    }

    /// The raw value of a field.
    #[inline]
    pub fn value(&self, kind: FieldKind) -> &str {
        self.field(kind).value()
    }

    /// Whether a field has been touched.
    #[inline]
    pub fn is_touched(&self, kind: FieldKind) -> bool {
        self.field(kind).is_touched()
    }

    /// Whether a field has been edited.
    #[inline]
    pub fn is_dirty(&self, kind: FieldKind) -> bool {
        self.field(kind).is_dirty()
    }

    /// Returns true if the field's value passes all its rules.
    #[inline]
    pub fn is_valid(&self, kind: FieldKind) -> bool {
        self.field(kind).is_valid()
    }

    /// The first failing rule of a field, if any.
    ///
    /// `Required` wins over `Pattern`, which wins over `Range`.
    #[inline]
    pub fn first_error(&self, kind: FieldKind) -> Option<ErrorTag> {
        self.field(kind).first_error()
    }

    /// Every field that currently fails, with its first error.
    pub fn errors(&self) -> impl Iterator<Item = (FieldKind, ErrorTag)> + '_ {
        self.fields
            .iter()
            .filter_map(|field| field.first_error().map(|tag| (field.kind(), tag)))
    }

    /// Returns true if every field is valid and every field has been touched
    /// or edited.
    ///
    /// An untouched form is never reported as valid, even if all of its
    /// values happen to pass.
    pub fn is_form_valid(&self) -> bool {
        let all_valid = self.fields.iter().all(Field::is_valid);
        let all_interacted = self.fields.iter().all(Field::is_interacted);

        trace!(all_valid, all_interacted, "form validity evaluated");

        all_valid && all_interacted
    }

    /// The card number, formatted by `formatter`.
    pub fn formatted_number_with<F>(&self, formatter: &F) -> String
    where
        F: DisplayFormatter + ?Sized,
    {
        formatter.format_card_number(numeric_value(self.value(FieldKind::Number)))
    }

    /// The expiry month, formatted by `formatter`.
    pub fn formatted_month_with<F>(&self, formatter: &F) -> String
    where
        F: DisplayFormatter + ?Sized,
    {
        formatter.format_expiry_date(numeric_value(self.value(FieldKind::Month)))
    }

    /// The expiry year, formatted by `formatter`.
    pub fn formatted_year_with<F>(&self, formatter: &F) -> String
    where
        F: DisplayFormatter + ?Sized,
    {
        formatter.format_expiry_date(numeric_value(self.value(FieldKind::Year)))
    }

    /// The card number, formatted by [`DefaultFormatter`].
    pub fn formatted_number(&self) -> String {
        self.formatted_number_with(&DefaultFormatter::new())
    }

    /// The expiry month, formatted by [`DefaultFormatter`].
    pub fn formatted_month(&self) -> String {
        self.formatted_month_with(&DefaultFormatter::new())
    }

    /// The expiry year, formatted by [`DefaultFormatter`].
    pub fn formatted_year(&self) -> String {
        self.formatted_year_with(&DefaultFormatter::new())
    }

    /// The cardholder name, or the placeholder while it is empty.
    pub fn display_name(&self) -> &str {
        match self.value(FieldKind::Name) {
            "" => self.name_placeholder.as_str(),
            name => name,
        }
    }

    /// The message for a field's first error, looked up in `messages`.
    ///
    /// Returns `None` if the field is valid or the table has no entry for
    /// its error.
    pub fn error_message<'m>(
        &self,
        kind: FieldKind,
        messages: &'m ErrorMessages,
    ) -> Option<&'m str> {
        self.first_error(kind).and_then(|tag| messages.get(tag))
    }

    /// Like [`error_message`](Self::error_message), keyed by field name.
    ///
    /// Unknown names yield `None`.
    pub fn error_message_by_name<'m>(
        &self,
        name: &str,
        messages: &'m ErrorMessages,
    ) -> Option<&'m str> {
        let kind: FieldKind = name.parse().ok()?;
        self.error_message(kind, messages)
    }

    fn stock_error(&self, kind: FieldKind) -> Option<String> {
        self.error_message(kind, &ErrorMessages::for_field(kind))
            .map(str::to_owned)
    }

    /// Display value for the card number.
    pub fn card_number(&self) -> String {
        self.formatted_number()
    }

    /// Display value for the expiry month.
    pub fn card_expiry_month(&self) -> String {
        self.formatted_month()
    }

    /// Display value for the expiry year.
    pub fn card_expiry_year(&self) -> String {
        self.formatted_year()
    }

    /// Display value for the cardholder name.
    pub fn card_holder_name(&self) -> &str {
        self.display_name()
    }

    /// Stock error message for the card number.
    pub fn card_number_error(&self) -> Option<String> {
        self.stock_error(FieldKind::Number)
    }

    /// Stock error message for the cardholder name.
    pub fn card_holder_name_error(&self) -> Option<String> {
        self.stock_error(FieldKind::Name)
    }

    /// Stock error message for the expiry month.
    pub fn card_expiry_month_error(&self) -> Option<String> {
        self.stock_error(FieldKind::Month)
    }

    /// Stock error message for the expiry year.
    pub fn card_expiry_year_error(&self) -> Option<String> {
        self.stock_error(FieldKind::Year)
    }

    /// Stock error message for the CVV.
    pub fn card_cvv_error(&self) -> Option<String> {
        self.stock_error(FieldKind::Cvv)
    }

    /// A snapshot of everything a renderer shows.
    pub fn view(&self) -> FormView {
        FormView {
            card_number: self.card_number(),
            card_holder_name: self.card_holder_name().to_string(),
            card_expiry_month: self.card_expiry_month(),
            card_expiry_year: self.card_expiry_year(),
            card_number_error: self.card_number_error(),
            card_holder_name_error: self.card_holder_name_error(),
            card_expiry_month_error: self.card_expiry_month_error(),
            card_expiry_year_error: self.card_expiry_year_error(),
            card_cvv_error: self.card_cvv_error(),
            form_valid: self.is_form_valid(),
        }
    }
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PaymentForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentForm")
            .field("fields", &self.fields)
            .field("years", &self.years)
            .finish()
    }
}
