//! Birthday value object and the `DD.MM.YYYY` date codec.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// chrono format string for birthdays and congratulation dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono accepts single-digit days and months, the shape check does not.
static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile date regex")
});

/// Parse a strict `DD.MM.YYYY` string into a calendar date.
///
/// # Errors
///
/// Returns `ValidationError::InvalidBirthday` if the string is not two-digit
/// day, two-digit month and four-digit year, or if it names a day that does
/// not exist (e.g. `31.02.2020`).
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    if !DATE_SHAPE.is_match(value) {
        return Err(ValidationError::InvalidBirthday(value.to_string()));
    }
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))?;
    // chrono's proleptic calendar has a year 0, the calendar we accept starts at 1.
    if date.year() < 1 {
        return Err(ValidationError::InvalidBirthday(value.to_string()));
    }
    Ok(date)
}

/// Format a calendar date as `DD.MM.YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A contact's date of birth.
///
/// Keeps the string the user typed for display and persistence alongside
/// the parsed date used by the birthday scheduler.
///
/// # Example
///
/// ```
/// use chrono::Datelike;
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("28.11.1989").unwrap();
/// assert_eq!(birthday.as_str(), "28.11.1989");
/// assert_eq!(birthday.date().month(), 11);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format and the calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is not a valid
    /// `DD.MM.YYYY` date.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let date = parse_date(&value)?;
        Ok(Self { value, date })
    }

    /// Get the birthday as entered, in `DD.MM.YYYY` form.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
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

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
