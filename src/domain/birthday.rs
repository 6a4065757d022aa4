//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format accepted and rendered for birthdays.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A type-safe wrapper for birthdays.
///
/// Construction parses the raw text as a real calendar date in
/// `YYYY-MM-DD` form; impossible dates such as `2023-02-30` are rejected.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("2000-01-01").unwrap();
/// assert_eq!(birthday.to_string(), "2000-01-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value does not
    /// parse as a real `YYYY-MM-DD` calendar date.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday is celebrated in `year`.
    ///
    /// Feb 29 birthdays fall on Mar 1 in years without a leap day.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
        })
    }

    /// Whole days from `today` to the next occurrence of this birthday.
    ///
    /// Returns 0 when `today` is the birthday.
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        let mut next = self.occurrence_in(today.year());
        if next < today {
            next = self.occurrence_in(today.year() + 1);
        }
        (next - today).num_days()
    }
}

// Serde support - serialize as a YYYY-MM-DD string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
