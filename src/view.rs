//! Render snapshot of a form.
//!
//! [`FormView`] is the contract between the form and whatever draws it:
//! display strings for the card preview, one optional message per field,
//! and whether the submit action should be enabled. It carries no raw
//! values beyond what is shown on the card preview.

/// Everything a renderer needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FormView {
    /// Formatted card number.
    pub card_number: String,
    /// Cardholder name or placeholder.
    pub card_holder_name: String,
    /// Formatted expiry month.
    pub card_expiry_month: String,
    /// Formatted expiry year.
    pub card_expiry_year: String,
    /// Message for the card number field.
    pub card_number_error: Option<String>,
    /// Message for the cardholder name field.
    pub card_holder_name_error: Option<String>,
    /// Message for the expiry month field.
    pub card_expiry_month_error: Option<String>,
    /// Message for the expiry year field.
    pub card_expiry_year_error: Option<String>,
    /// Message for the CVV field.
    pub card_cvv_error: Option<String>,
    /// Whether the form is valid and fully interacted with.
    pub form_valid: bool,
}

impl FormView {
    /// Returns true if any field has a message to show.
    pub fn has_errors(&self) -> bool {
        [
            &self.card_number_error,
            &self.card_holder_name_error,
            &self.card_expiry_month_error,
            &self.card_expiry_year_error,
            &self.card_cvv_error,
        ]
        .iter()
        .any(|error| error.is_some())
    }

    /// Serializes the view as JSON for a JavaScript renderer.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{FieldKind, PaymentForm};

    #[test]
    fn test_view_of_empty_form() {
        let view = PaymentForm::with_current_year(2024).view();
        assert_eq!(view.card_number, "0");
        assert_eq!(view.card_holder_name, "Card Holder Name");
        assert_eq!(view.card_expiry_month, "00");
        assert_eq!(view.card_expiry_year, "00");
        assert_eq!(view.card_cvv_error.as_deref(), Some("Invalid CVV/CVC"));
        assert!(view.has_errors());
        assert!(!view.form_valid);
    }

    #[test]
    fn test_view_of_complete_form() {
        let mut form = PaymentForm::with_current_year(2024);
        form.input(FieldKind::Number, "5500000000000004");
        form.input(FieldKind::Name, "John Smith");
        form.input(FieldKind::Month, "12");
        form.input(FieldKind::Year, "2027");
        form.input(FieldKind::Cvv, "999");

        let view = form.view();
        assert_eq!(view.card_number, "5500 0000 0000 0004");
        assert_eq!(view.card_holder_name, "John Smith");
        assert_eq!(view.card_expiry_month, "12");
        assert_eq!(view.card_expiry_year, "2027");
        assert!(!view.has_errors());
        assert!(view.form_valid);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_view_json_uses_camel_case() {
        let json = PaymentForm::with_current_year(2024).view().to_json().unwrap();
        assert!(json.contains("\"cardHolderNameError\":\"Invalid Cardholder Name\""));
        assert!(json.contains("\"formValid\":false"));
    }
}
