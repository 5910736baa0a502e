//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The display text of each variant is shown to the operator verbatim, so it
/// reads as a complete sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(_) => write!(f, "Phone number must be 10 digits."),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_do_not_echo_input() {
        let err = ValidationError::InvalidPhone("123".to_string());
        assert_eq!(err.to_string(), "Phone number must be 10 digits.");

        let err = ValidationError::InvalidBirthday("31.02.2020".to_string());
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }
}
