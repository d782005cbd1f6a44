//! Main token service implementation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;

/// Claims carried by a session token.
///
/// Tokens are not persisted; they are reconstructed and verified on every
/// request from the signature alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,

    /// Username at issuance
    pub username: String,

    /// Issued-at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a session token expiring `expiry_seconds` from now.
    pub fn new(user_id: i64, username: &str, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// The user id the token was issued for.
    pub fn user_id(&self) -> Result<i64, DomainError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))
    }
}

/// Service issuing and verifying signed, time-limited session tokens.
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from a signing configuration.
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry is the only termination mechanism for a session, so no
        // grace window: expired means rejected.
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Token lifetime in seconds from issuance.
    pub fn expiry_seconds(&self) -> i64 {
        self.config.expiry_seconds
    }

    /// Issues a signed token embedding the user's identity.
    pub fn issue(&self, user_id: i64, username: &str) -> Result<String, DomainError> {
        let claims = Claims::new(user_id, username, self.config.expiry_seconds);
        self.encode_claims(&claims)
    }

    /// Verifies signature integrity and expiry, returning the claims.
    ///
    /// Structural tampering and expiry map to distinct variants for
    /// logging, but callers must not leak the distinction to clients.
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else {
                    DomainError::Token(TokenError::InvalidToken)
                }
            })?;

        Ok(token_data.claims)
    }

    /// Encodes claims into a signed token.
    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(TokenConfig::new("test-secret", 3600))
    }

    /// Claims as they would look for a token issued `minutes_ago` in the
    /// past, with the standard one-hour lifetime.
    fn claims_issued_minutes_ago(minutes_ago: i64) -> Claims {
        let issued_at = Utc::now() - Duration::minutes(minutes_ago);
        Claims {
            sub: "1".to_string(),
            username: "alice".to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::hours(1)).timestamp(),
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = service();
        let token = service.issue(42, "alice").unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_valid_just_before_expiry() {
        let service = service();
        let token = service
            .encode_claims(&claims_issued_minutes_ago(59))
            .unwrap();
        assert!(service.verify(&token).is_ok());
    }

    #[test]
    fn test_token_rejected_after_expiry() {
        let service = service();
        let token = service
            .encode_claims(&claims_issued_minutes_ago(61))
            .unwrap();
        let result = service.verify(&token);
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::TokenExpired))
        ));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = service();
        let token = service.issue(42, "alice").unwrap();

        // Flip a character in the payload segment.
        let mut parts: Vec<String> = token.split('.').map(|s| s.to_string()).collect();
        let mut payload: Vec<char> = parts[1].chars().collect();
        payload[0] = if payload[0] == 'A' { 'B' } else { 'A' };
        parts[1] = payload.into_iter().collect();
        let tampered = parts.join(".");

        let result = service.verify(&tampered);
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::InvalidToken))
        ));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let issuer = TokenService::new(TokenConfig::new("other-secret", 3600));
        let token = issuer.issue(42, "alice").unwrap();

        let result = service().verify(&token);
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::InvalidToken))
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let result = service().verify("not-a-token");
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::InvalidToken))
        ));
    }
}
