//! Input validation using the validator crate.
//!
//! ZIP codes are checked before any network request is made; the
//! [`ZipCode`] newtype can only be built from input that passed the check.
//!
//! # Usage
//!
//! ```ignore
//! use validator::Validate;
//! use repfinder::validation::validate_zip_code;
//!
//! #[derive(Validate)]
//! struct LookupRequest {
//!     #[validate(custom(function = "validate_zip_code"))]
//!     zip: String,
//! }
//! ```

use std::fmt;
use validator::ValidationError;

/// Validates that a string is a five-digit US ZIP code (`^\d{5}$`).
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns a `ValidationError` with code `invalid_zip_code` if the trimmed
/// value is not exactly five ASCII digits.
pub fn validate_zip_code(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();

    if trimmed.len() != 5 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::new("invalid_zip_code"));
    }

    Ok(())
}

/// A ZIP code that has passed [`validate_zip_code`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Validate and wrap `value`.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`validate_zip_code`].
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        validate_zip_code(value)?;
        Ok(Self(value.trim().to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ZipCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
