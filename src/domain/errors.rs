//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a calendar date in `DD.MM.YYYY` form.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {} (expected 10 digits)", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid date format: {}. Use DD.MM.YYYY", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Contact name cannot be empty"
        );
        assert_eq!(
            ValidationError::InvalidPhone("123".to_string()).to_string(),
            "Invalid phone number: 123 (expected 10 digits)"
        );
        assert_eq!(
            ValidationError::InvalidBirthday("31.02.2020".to_string()).to_string(),
            "Invalid date format: 31.02.2020. Use DD.MM.YYYY"
        );
    }
}
