//! DTOs for the registration and login endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /register.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Username and password are required."))]
    pub username: String,

    #[validate(length(min = 1, message = "Username and password are required."))]
    pub password: String,
}

/// Request body for POST /login.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username and password are required."))]
    pub username: String,

    #[validate(length(min = 1, message = "Username and password are required."))]
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    /// Bearer token for subsequent requests, valid for one hour.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_username_fails_validation() {
        let request = RegisterRequest {
            username: String::new(),
            password: "hunter2".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_populated_credentials_pass_validation() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
