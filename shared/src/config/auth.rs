//! JWT authentication configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default access token lifetime in seconds (1 hour)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 3600;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub token_expiry: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_expiry: DEFAULT_TOKEN_EXPIRY_SECONDS,
        }
    }

    /// Set the token expiry in seconds
    pub fn with_token_expiry(mut self, seconds: i64) -> Self {
        self.token_expiry = seconds;
        self
    }

    /// Load the JWT configuration from environment variables.
    ///
    /// `JWT_SECRET` is mandatory. There is deliberately no fallback value:
    /// starting without an externally supplied secret is a fatal
    /// configuration error, not a silently insecure default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingVariable {
                name: "JWT_SECRET".to_string(),
            })?;

        let token_expiry = match std::env::var("JWT_TOKEN_EXPIRY_SECONDS") {
            Ok(raw) => raw.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                name: "JWT_TOKEN_EXPIRY_SECONDS".to_string(),
                value: raw,
            })?,
            Err(_) => DEFAULT_TOKEN_EXPIRY_SECONDS,
        };

        Ok(Self {
            secret,
            token_expiry,
        })
    }
}
