//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input is shorter than the minimum length.
    #[error("phone number must be at least {min} characters")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// The input contains a character outside the allowed set.
    #[error("phone number may only contain digits, spaces, dashes, and parentheses")]
    InvalidCharacter,
}

/// A loosely validated phone number.
///
/// The backend does no phone normalization, so this deliberately accepts
/// common human formattings (`(555) 010-4477`, `555 010 4477`) and only
/// rejects obvious garbage before it is submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum length of a phone number.
    pub const MIN_LENGTH: usize = 10;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is shorter than ten characters or
    /// contains anything other than digits, spaces, dashes, or parentheses.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.len() < Self::MIN_LENGTH {
            return Err(PhoneError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        if !s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
        {
            return Err(PhoneError::InvalidCharacter);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phones() {
        assert!(Phone::parse("5550104477").is_ok());
        assert!(Phone::parse("(555) 010-4477").is_ok());
        assert!(Phone::parse("555 010 4477").is_ok());
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            Phone::parse("555-0104"),
            Err(PhoneError::TooShort { min: 10 })
        ));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(matches!(
            Phone::parse("555.010.4477"),
            Err(PhoneError::InvalidCharacter)
        ));
        assert!(matches!(
            Phone::parse("+1 555 010 4477"),
            Err(PhoneError::InvalidCharacter)
        ));
    }
}
