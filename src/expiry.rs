//! Expiry year bounds.
//!
//! The form accepts expiry years from the current calendar year up to a
//! fixed span ahead (three years by default). The bound is computed once
//! when the form is built and never moves afterwards.
//!
//! # Example
//!
//! ```
//! use card_form::expiry::YearRange;
//!
//! let years = YearRange::starting_at(2024, 3);
//! assert_eq!(years.max(), 2027);
//! assert!(years.contains(2026));
//! assert!(!years.contains(2023));
//! ```

use chrono::{DateTime, Datelike, Local, TimeZone};
use std::fmt;

/// Default number of years after the current one that are accepted.
pub const DEFAULT_YEAR_SPAN: u16 = 3;

/// An inclusive range of acceptable expiry years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    min: u16,
    max: u16,
}

impl YearRange {
    /// Creates a range from explicit bounds. Bounds are swapped if reversed.
    pub const fn new(min: u16, max: u16) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Creates `[year, year + span]`.
    pub const fn starting_at(year: u16, span: u16) -> Self {
        Self {
            min: year,
            max: year.saturating_add(span),
        }
    }

    /// Creates the range starting at the current calendar year.
    pub fn current(span: u16) -> Self {
        Self::starting_at(current_year(), span)
    }

    /// First accepted year.
    #[inline]
    pub const fn min(&self) -> u16 {
        self.min
    }

    /// Last accepted year.
    #[inline]
    pub const fn max(&self) -> u16 {
        self.max
    }

    /// Returns true if `year` lies within the range.
    #[inline]
    pub const fn contains(&self, year: u16) -> bool {
        self.min <= year && year <= self.max
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Returns the current calendar year in the local time zone.
pub fn current_year() -> u16 {
    year_of(&Local::now())
}

/// The calendar year of `now` as seen in its own time zone.
pub fn year_of<Tz: TimeZone>(now: &DateTime<Tz>) -> u16 {
    now.year().clamp(0, i32::from(u16::MAX)) as u16
}
