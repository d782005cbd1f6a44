//! Specific error enums bridged into `DomainError`.
//!
//! Validation messages reproduce the wording callers of the original API
//! depend on, so the variants carry their message text directly.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Registration attempted with a username that is already taken.
    #[error("Username already exists.")]
    UserAlreadyExists,

    /// Login failed. A nonexistent username and a wrong password produce
    /// this same variant so callers cannot learn which credential was wrong.
    #[error("Invalid username or password.")]
    InvalidCredentials,
}

/// Token-related errors
///
/// The authorization gate collapses both variants into one rejection; the
/// split exists for logging only.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    /// Malformed structure, bad signature, or unusable claims.
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Employee record validation errors.
///
/// Rules are evaluated in a fixed order and only the first violation is
/// reported; each variant names the offending field.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required.")]
    RequiredField { field: String },

    #[error("Employee must be at least 18 years old.")]
    UnderAge,

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Phone number must be 10 digits.")]
    InvalidPhone,

    #[error("Date of joining cannot be in the future.")]
    JoiningDateInFuture,

    #[error("Employee ID must be 1-10 alphanumeric characters.")]
    InvalidEmployeeId,
}

impl ValidationError {
    /// The field the first violated rule points at.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field } => field,
            ValidationError::UnderAge => "date_of_birth",
            ValidationError::InvalidEmail => "email",
            ValidationError::InvalidPhone => "phone_number",
            ValidationError::JoiningDateInFuture => "date_of_joining",
            ValidationError::InvalidEmployeeId => "employee_id",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_match_api_contract() {
        let error = ValidationError::RequiredField {
            field: "name".to_string(),
        };
        assert_eq!(error.to_string(), "All fields are required.");
        assert_eq!(error.field(), "name");

        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Phone number must be 10 digits."
        );
        assert_eq!(
            ValidationError::JoiningDateInFuture.to_string(),
            "Date of joining cannot be in the future."
        );
    }

    #[test]
    fn test_credential_failures_share_one_message() {
        // Username-not-found and wrong-password must be indistinguishable.
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid username or password."
        );
    }
}
