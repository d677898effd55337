//! WebAssembly bindings for the payment card form.
//!
//! Exposes [`PaymentForm`](crate::PaymentForm) to JavaScript with the getter
//! names a view template binds to.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { PaymentForm } from 'card_form';
//!
//! await init();
//!
//! const form = new PaymentForm();
//!
//! // On input / blur events
//! form.input("number", event.target.value);
//! form.markTouched("number");
//! form.markDirty("name");
//!
//! // In the template
//! console.log(form.cardNumber);        // "4111 1111 1111 1111"
//! console.log(form.cardNumberError);   // undefined or "Invalid Card Number"
//! submit.disabled = !form.isFormValidAndTouched();
//!
//! // Custom messages
//! form.getErrorMessage("year", { required: "Enter a year", range: "Expired" });
//! ```

#![cfg(feature = "wasm")]

use crate::{ErrorTag, FieldKind};
use wasm_bindgen::prelude::*;

fn field_kind(name: &str) -> Result<FieldKind, JsValue> {
    name.parse()
        .map_err(|e: crate::FormError| JsValue::from_str(&e.to_string()))
}

/// A card form, as seen from JavaScript.
#[wasm_bindgen]
pub struct PaymentForm {
    inner: crate::PaymentForm,
}

#[wasm_bindgen]
impl PaymentForm {
    /// Creates an empty form using the browser's local calendar year.
    #[wasm_bindgen(constructor)]
    pub fn new() -> PaymentForm {
        PaymentForm::for_host_year(js_sys::Date::new_0().get_full_year())
    }

    /// Creates an empty form as if the current year were `year`.
    #[wasm_bindgen(js_name = withCurrentYear)]
    pub fn with_current_year(year: u16) -> PaymentForm {
        PaymentForm {
            inner: crate::PaymentForm::with_current_year(year),
        }
    }

    fn for_host_year(year: u32) -> PaymentForm {
        let year = u16::try_from(year).unwrap_or(u16::MAX);
        PaymentForm {
            inner: crate::PaymentForm::with_current_year(year),
        }
    }

    /// Stores a value without marking the field.
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        self.inner.set_value(field_kind(field)?, value);
        Ok(())
    }

    /// Records a user edit.
    pub fn input(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        self.inner.input(field_kind(field)?, value);
        Ok(())
    }

    /// Marks a field touched.
    #[wasm_bindgen(js_name = markTouched)]
    pub fn mark_touched(&mut self, field: &str) -> Result<(), JsValue> {
        self.inner.mark_touched(field_kind(field)?);
        Ok(())
    }

    /// Marks a field dirty.
    #[wasm_bindgen(js_name = markDirty)]
    pub fn mark_dirty(&mut self, field: &str) -> Result<(), JsValue> {
        self.inner.mark_dirty(field_kind(field)?);
        Ok(())
    }

    /// Marks every field touched.
    #[wasm_bindgen(js_name = markAllTouched)]
    pub fn mark_all_touched(&mut self) {
        self.inner.mark_all_touched();
    }

    /// Whether a single field is valid.
    #[wasm_bindgen(js_name = isValid)]
    pub fn is_valid(&self, field: &str) -> Result<bool, JsValue> {
        Ok(self.inner.is_valid(field_kind(field)?))
    }

    /// Whether the form is valid and every field was interacted with.
    #[wasm_bindgen(js_name = isFormValidAndTouched)]
    pub fn is_form_valid(&self) -> bool {
        self.inner.is_form_valid()
    }

    /// The first error tag of a field (`"required"`, `"pattern"`, `"range"`).
    #[wasm_bindgen(js_name = firstError)]
    pub fn first_error(&self, field: &str) -> Result<Option<String>, JsValue> {
        Ok(self
            .inner
            .first_error(field_kind(field)?)
            .map(|tag| tag.as_str().to_string()))
    }

    /// Looks up a field's message in a plain `{ tag: message }` object.
    ///
    /// Unknown fields and missing entries give `undefined`.
    #[wasm_bindgen(js_name = getErrorMessage)]
    pub fn get_error_message(&self, field: &str, messages: &js_sys::Object) -> Option<String> {
        let tag = self.inner.first_error(field.parse().ok()?)?;

        js_sys::Object::keys(messages)
            .iter()
            .filter_map(|key| key.as_string())
            .filter(|key| key.parse::<ErrorTag>().ok() == Some(tag))
            .find_map(|key| {
                js_sys::Reflect::get(messages, &JsValue::from_str(&key))
                    .ok()
                    .and_then(|message| message.as_string())
            })
    }

    /// Formatted card number.
    #[wasm_bindgen(getter, js_name = cardNumber)]
    pub fn card_number(&self) -> String {
        self.inner.card_number()
    }

    /// Formatted expiry month.
    #[wasm_bindgen(getter, js_name = cardExpiryMonth)]
    pub fn card_expiry_month(&self) -> String {
        self.inner.card_expiry_month()
    }

    /// Formatted expiry year.
    #[wasm_bindgen(getter, js_name = cardExpiryYear)]
    pub fn card_expiry_year(&self) -> String {
        self.inner.card_expiry_year()
    }

    /// Cardholder name or placeholder.
    #[wasm_bindgen(getter, js_name = cardHolderName)]
    pub fn card_holder_name(&self) -> String {
        self.inner.card_holder_name().to_string()
    }

    /// Card number message.
    #[wasm_bindgen(getter, js_name = cardNumberError)]
    pub fn card_number_error(&self) -> Option<String> {
        self.inner.card_number_error()
    }

    /// Cardholder name message.
    #[wasm_bindgen(getter, js_name = cardHolderNameError)]
    pub fn card_holder_name_error(&self) -> Option<String> {
        self.inner.card_holder_name_error()
    }

    /// Expiry month message.
    #[wasm_bindgen(getter, js_name = cardExpiryMonthError)]
    pub fn card_expiry_month_error(&self) -> Option<String> {
        self.inner.card_expiry_month_error()
    }

    /// Expiry year message.
    #[wasm_bindgen(getter, js_name = cardExpiryYearError)]
    pub fn card_expiry_year_error(&self) -> Option<String> {
        self.inner.card_expiry_year_error()
    }

    /// CVV message.
    #[wasm_bindgen(getter, js_name = cardCVVError)]
    pub fn card_cvv_error(&self) -> Option<String> {
        self.inner.card_cvv_error()
    }
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips separators from a pasted card number.
#[wasm_bindgen(js_name = stripFormatting)]
pub fn strip_formatting(input: &str) -> String {
    crate::format::strip_formatting(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiry::YearRange;

    #[test]
    fn test_host_year_sets_range() {
        let form = PaymentForm::for_host_year(2025);
        assert_eq!(form.inner.year_range(), YearRange::new(2025, 2028));
    }

    #[test]
    fn test_host_year_clamps() {
        let form = PaymentForm::for_host_year(u32::MAX);
        assert_eq!(form.inner.year_range(), YearRange::new(u16::MAX, u16::MAX));
    }

    #[test]
    fn test_mark_dirty() {
        let mut form = PaymentForm::with_current_year(2025);
        form.mark_dirty("name").unwrap();
        assert!(form.inner.is_dirty(FieldKind::Name));
        assert!(!form.inner.is_touched(FieldKind::Name));
        assert!(!form.inner.is_dirty(FieldKind::Number));
    }
}
