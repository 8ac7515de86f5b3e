//! Phone value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly ten ASCII digits with no formatting
/// characters. Validation happens at construction, so every `Phone` held by
/// a record is well formed.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Phone::new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the value is exactly
    /// ten decimal digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    fn is_valid(phone: &str) -> bool {
        phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
