//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text format used to read and render birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})$").expect("birthday pattern is a valid regex")
});

/// A contact's birthday, parsed from `DD.MM.YYYY` and stored as a calendar date.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// assert!(Birthday::new("31.02.2020").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the text does not
    /// follow the pattern or names an impossible date such as `31.02.2020`.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        match Self::parse(&text) {
            Some(date) => Ok(Self(date)),
            None => Err(ValidationError::InvalidBirthday(text)),
        }
    }

    fn parse(text: &str) -> Option<NaiveDate> {
        let caps = BIRTHDAY_PATTERN.captures(text)?;
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        if year < 1 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// The stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's month and day re-anchored to `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
