//! Validation rules and the error tags they produce.
//!
//! Every field carries an ordered list of [`Rule`]s. Rules are evaluated in
//! order and the first one that fails decides the field's [`ErrorTag`], so a
//! field never reports more than one problem at a time.
//!
//! # Example
//!
//! ```
//! use card_form::rule::{first_failure, ErrorTag, Rule};
//!
//! let rules = vec![Rule::Required, Rule::pattern(r"^[0-9]{3}$").unwrap()];
//!
//! assert_eq!(first_failure(&rules, ""), Some(ErrorTag::Required));
//! assert_eq!(first_failure(&rules, "12"), Some(ErrorTag::Pattern));
//! assert_eq!(first_failure(&rules, "123"), None);
//! ```

use crate::error::FormError;
use crate::expiry::YearRange;
use crate::field::FieldKind;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ErrorTag {
    /// The field is empty.
    Required,
    /// The value does not match the field's pattern.
    Pattern,
    /// The value is well-formed but outside the accepted range.
    Range,
}

impl ErrorTag {
    /// All tags, in precedence order.
    pub const ALL: [ErrorTag; 3] = [Self::Required, Self::Pattern, Self::Range];

    /// Returns the symbolic name used in message tables.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Pattern => "pattern",
            Self::Range => "range",
        }
    }
}

impl fmt::Display for ErrorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorTag {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "required" => Ok(Self::Required),
            "pattern" => Ok(Self::Pattern),
            "range" => Ok(Self::Range),
            _ => Err(FormError::InvalidErrorTag { name: s.to_string() }),
        }
    }
}

/// A predicate used by [`Rule::Custom`]. Returns `true` when the value passes.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A single validation check.
#[derive(Clone)]
pub enum Rule {
    /// Fails with [`ErrorTag::Required`] when the value is empty.
    Required,
    /// Fails with [`ErrorTag::Pattern`] when a non-empty value does not match.
    ///
    /// Empty values pass; emptiness is the job of [`Rule::Required`].
    Pattern(Regex),
    /// Fails with `tag` when the predicate returns `false`.
    Custom {
        /// Tag reported on failure.
        tag: ErrorTag,
        /// The check itself.
        predicate: Predicate,
    },
}

impl Rule {
    /// Builds a [`Rule::Pattern`] from a regular expression.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Builds a [`Rule::Custom`] from a closure.
    pub fn custom<F>(tag: ErrorTag, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Custom {
            tag,
            predicate: Arc::new(predicate),
        }
    }

    /// Builds the expiry-year range rule.
    ///
    /// Anything that does not parse as a year is out of range.
    pub fn year_range(years: YearRange) -> Self {
        Self::custom(ErrorTag::Range, move |value| {
            value
                .parse::<u16>()
                .map(|year| years.contains(year))
                .unwrap_or(false)
        })
    }

    /// The tag this rule reports when it fails.
    #[inline]
    pub fn tag(&self) -> ErrorTag {
        match self {
            Self::Required => ErrorTag::Required,
            Self::Pattern(_) => ErrorTag::Pattern,
            Self::Custom { tag, .. } => *tag,
        }
    }

    /// Checks a value, returning the tag on failure.
    pub fn check(&self, value: &str) -> Option<ErrorTag> {
        let passed = match self {
            Self::Required => !value.is_empty(),
            Self::Pattern(regex) => value.is_empty() || regex.is_match(value),
            Self::Custom { predicate, .. } => predicate(value),
        };

        if passed {
            None
        } else {
            Some(self.tag())
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("Required"),
            Self::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Self::Custom { tag, .. } => f
                .debug_struct("Custom")
                .field("tag", tag)
                .finish_non_exhaustive(),
        }
    }
}

/// Returns the tag of the first rule that fails, if any.
#[inline]
pub fn first_failure(rules: &[Rule], value: &str) -> Option<ErrorTag> {
    rules.iter().find_map(|rule| rule.check(value))
}

const CARD_NUMBER_PATTERN: &str = r"^[0-9]{16}$";
const HOLDER_NAME_PATTERN: &str = r"^[A-Za-z\s]+$";
const MONTH_PATTERN: &str = r"^(0[1-9]|1[0-2])$";
const YEAR_PATTERN: &str = r"^[0-9]{4}$";
const CVV_PATTERN: &str = r"^[0-9]{3}$";

fn compiled(cell: &'static OnceLock<Regex>, pattern: &'static str) -> Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("built-in field pattern is valid"))
        .clone()
}

/// The pattern a field's value must match.
pub fn pattern_for(kind: FieldKind) -> Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    static NAME: OnceLock<Regex> = OnceLock::new();
    static MONTH: OnceLock<Regex> = OnceLock::new();
    static YEAR: OnceLock<Regex> = OnceLock::new();
    static CVV: OnceLock<Regex> = OnceLock::new();

    match kind {
        FieldKind::Number => compiled(&NUMBER, CARD_NUMBER_PATTERN),
        FieldKind::Name => compiled(&NAME, HOLDER_NAME_PATTERN),
        FieldKind::Month => compiled(&MONTH, MONTH_PATTERN),
        FieldKind::Year => compiled(&YEAR, YEAR_PATTERN),
        FieldKind::Cvv => compiled(&CVV, CVV_PATTERN),
    }
}

/// The stock rule list for a field.
///
/// | Field | Pattern | Extra |
/// |-------|---------|-------|
/// | number | 16 digits | |
/// | name | letters and whitespace | |
/// | month | `01`-`12` | |
/// | year | 4 digits | within `years` |
/// | cvv | 3 digits | |
pub fn default_rules(kind: FieldKind, years: YearRange) -> Vec<Rule> {
    let mut rules = vec![Rule::Required, Rule::Pattern(pattern_for(kind))];
    if kind == FieldKind::Year {
        rules.push(Rule::year_range(years));
    }
    rules
}
