//! Password hashing and verification.

use crate::errors::{DomainError, DomainResult};

/// A bcrypt hash of a fixed throwaway password. Login verifies against this
/// when the username does not exist, so the not-found path costs the same
/// as the wrong-password path.
const DUMMY_HASH: &str = "$2b$12$K4SR6HIdxxTdBBB3eZ8mPuKbHFWDlJOTdqiJuOz8iXcTO37eFf3aG";

/// Service wrapping one-way, salted, work-factor-tunable password hashing.
///
/// The bcrypt KDF is CPU-expensive by design, so both operations run on the
/// blocking thread pool; the request task suspends there instead of
/// stalling the dispatcher.
#[derive(Debug, Clone)]
pub struct CredentialService {
    cost: u32,
}

impl CredentialService {
    /// Create a credential service with the default bcrypt work factor.
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a credential service with an explicit work factor. Tests use
    /// a low cost to keep hashing fast.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password. Never reversible; failure means resource
    /// exhaustion and is a server error, not a validation error.
    pub async fn hash(&self, password: &str) -> DomainResult<String> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Hashing task failed: {}", e),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            })
    }

    /// Verify a password against a stored hash.
    pub async fn verify(&self, password: &str, hashed: &str) -> DomainResult<bool> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Hashing task failed: {}", e),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            })
    }

    /// Burn the same verification effort as a real check without a stored
    /// hash. Used when the username does not exist, so response timing does
    /// not reveal which credential was wrong.
    pub async fn verify_dummy(&self, password: &str) -> DomainResult<()> {
        let _ = self.verify(password, DUMMY_HASH).await?;
        Ok(())
    }
}

impl Default for CredentialService {
    fn default() -> Self {
        Self::new()
    }
}
