//! Configuration for the token service.

use ems_shared::config::JwtConfig;

/// Token service configuration.
///
/// The signing secret is process-wide and supplied once at construction;
/// the service never reads ambient globals.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HMAC signing secret
    pub secret: String,
    /// Token lifetime in seconds from issuance
    pub expiry_seconds: i64,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>, expiry_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            expiry_seconds,
        }
    }
}

impl From<JwtConfig> for TokenConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            secret: config.secret,
            expiry_seconds: config.token_expiry,
        }
    }
}
