//! Form fields and the fixed set of field keys.
//!
//! A [`Field`] holds the raw text the user typed, the ordered rules that
//! apply to it, and two interaction flags:
//!
//! - **touched**: the user has focused and left the input
//! - **dirty**: the user has changed the value
//!
//! Both flags only ever go from `false` to `true`.

use crate::error::FormError;
use crate::mask::mask_value;
use crate::rule::{first_failure, ErrorTag, Rule};
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroize;

/// The five inputs of the card form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FieldKind {
    /// Card number, 16 digits.
    Number,
    /// Cardholder name.
    Name,
    /// Expiry month, `01`-`12`.
    Month,
    /// Expiry year, 4 digits.
    Year,
    /// Card verification value, 3 digits.
    Cvv,
}

impl FieldKind {
    /// Every field, in form order.
    pub const ALL: [FieldKind; 5] = [
        Self::Number,
        Self::Name,
        Self::Month,
        Self::Year,
        Self::Cvv,
    ];

    /// Returns the field's key.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Name => "name",
            Self::Month => "month",
            Self::Year => "year",
            Self::Cvv => "cvv",
        }
    }

    /// Returns true for fields whose value must not appear in logs.
    #[inline]
    pub const fn is_sensitive(&self) -> bool {
        matches!(self, Self::Number | Self::Cvv)
    }

    #[inline]
    pub(crate) const fn index(&self) -> usize {
        match self {
            Self::Number => 0,
            Self::Name => 1,
            Self::Month => 2,
            Self::Year => 3,
            Self::Cvv => 4,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FormError::InvalidFieldKind { name: s.to_string() })
    }
}

/// One input slot of the form.
///
/// The raw value is wiped from memory when it is replaced and when the
/// field is dropped.
#[derive(Clone)]
pub struct Field {
    kind: FieldKind,
    value: String,
    rules: Vec<Rule>,
    touched: bool,
    dirty: bool,
}

impl Field {
    /// Creates an empty, untouched field.
    pub fn new(kind: FieldKind, rules: Vec<Rule>) -> Self {
        Self {
            kind,
            value: String::new(),
            rules,
            touched: false,
            dirty: false,
        }
    }

    /// Which field this is.
    #[inline]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The raw value as entered.
    ///
    /// For card number and CVV this is sensitive. Prefer
    /// [`masked_value`](Self::masked_value) for anything that gets logged.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The value with sensitive digits hidden.
    pub fn masked_value(&self) -> String {
        mask_value(self.kind, &self.value)
    }

    /// The rules applied to this field, in evaluation order.
    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether the field has been touched.
    #[inline]
    pub const fn is_touched(&self) -> bool {
        self.touched
    }

    /// Whether the field's value has been changed by the user.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the user has interacted with the field at all.
    #[inline]
    pub const fn is_interacted(&self) -> bool {
        self.touched || self.dirty
    }

    /// The first failing rule's tag, or `None` if the value is valid.
    #[inline]
    pub fn first_error(&self) -> Option<ErrorTag> {
        first_failure(&self.rules, &self.value)
    }

    /// Returns true if every rule passes.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.first_error().is_none()
    }

    pub(crate) fn set_value(&mut self, value: &str) {
        self.value.zeroize();
        self.value.push_str(value);
    }

    pub(crate) fn mark_touched(&mut self) -> bool {
        let changed = !self.touched;
        self.touched = true;
        changed
    }

    pub(crate) fn mark_dirty(&mut self) -> bool {
        let changed = !self.dirty;
        self.dirty = true;
        changed
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("kind", &self.kind)
            .field("value", &self.masked_value())
            .field("rules", &self.rules)
            .field("touched", &self.touched)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Drop for Field {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiry::YearRange;
    use crate::rule::default_rules;

    fn field(kind: FieldKind) -> Field {
        Field::new(kind, default_rules(kind, YearRange::new(2024, 2027)))
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.name().parse::<FieldKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_kind() {
        let err = "zip".parse::<FieldKind>().unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidFieldKind {
                name: "zip".to_string()
            }
        );
        // Keys are case sensitive.
        assert!("Number".parse::<FieldKind>().is_err());
    }

    #[test]
    fn test_indices_are_distinct() {
        for (i, kind) in FieldKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_new_field_is_pristine() {
        let f = field(FieldKind::Name);
        assert_eq!(f.value(), "");
        assert!(!f.is_touched());
        assert!(!f.is_dirty());
        assert!(!f.is_interacted());
        assert_eq!(f.first_error(), Some(ErrorTag::Required));
    }

    #[test]
    fn test_set_value_replaces() {
        let mut f = field(FieldKind::Cvv);
        f.set_value("12345");
        f.set_value("123");
        assert_eq!(f.value(), "123");
        assert!(f.is_valid());
        // Storing a value does not count as interaction.
        assert!(!f.is_interacted());
    }

    #[test]
    fn test_flags_are_monotonic() {
        let mut f = field(FieldKind::Month);
        assert!(f.mark_touched());
        assert!(!f.mark_touched());
        assert!(f.is_touched());

        assert!(f.mark_dirty());
        assert!(!f.mark_dirty());
        assert!(f.is_dirty());
    }

    #[test]
    fn test_debug_masks_sensitive_values() {
        let mut f = field(FieldKind::Number);
        f.set_value("4111111111111111");
        let debug = format!("{:?}", f);
        assert!(!debug.contains("4111111111111111"));
        assert!(debug.contains("1111"));

        let mut f = field(FieldKind::Name);
        f.set_value("Jane Doe");
        assert!(format!("{:?}", f).contains("Jane Doe"));
    }

    #[test]
    fn test_sensitive_kinds() {
        assert!(FieldKind::Number.is_sensitive());
        assert!(FieldKind::Cvv.is_sensitive());
        assert!(!FieldKind::Name.is_sensitive());
        assert!(!FieldKind::Month.is_sensitive());
        assert!(!FieldKind::Year.is_sensitive());
    }
}
