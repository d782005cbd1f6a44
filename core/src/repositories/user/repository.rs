//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository contract for `User` persistence.
///
/// Users are write-once in this core: they are created by registration and
/// looked up by login. Uniqueness of the username is enforced by the backing
/// store's unique index, not by a pre-check; a violated index surfaces as
/// `DomainError::DuplicateKey`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; the store assigns the identifier.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user including its assigned id
    /// * `Err(DomainError::DuplicateKey)` - The username is already taken
    /// * `Err(DomainError::Database)` - The storage call failed
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Find a user by exact (case-sensitive) username.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that username
    /// * `Err(DomainError::Database)` - The storage call failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}
