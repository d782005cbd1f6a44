//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

use super::repository::UserRepository;

/// In-memory user repository for tests.
///
/// Uniqueness is decided inside the write lock, mirroring the atomic
/// unique-index behaviour of the real store: of two racing creates for the
/// same username, exactly one succeeds.
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == user.username) {
            return Err(DomainError::DuplicateKey {
                field: "username".to_string(),
            });
        }

        let mut next_id = self.next_id.write().await;
        let created = User {
            id: *next_id,
            username: user.username,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        *next_id += 1;

        users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = MockUserRepository::new();
        let first = repo.create(NewUser::new("alice", "hash-a")).await.unwrap();
        let second = repo.create(NewUser::new("bob", "hash-b")).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repo = MockUserRepository::new();
        repo.create(NewUser::new("alice", "hash-a")).await.unwrap();

        let result = repo.create(NewUser::new("alice", "hash-b")).await;
        assert!(matches!(
            result,
            Err(DomainError::DuplicateKey { ref field }) if field == "username"
        ));

        // The first registration must survive the conflict.
        let survivor = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(survivor.password_hash, "hash-a");
    }

    #[tokio::test]
    async fn test_find_is_case_sensitive() {
        let repo = MockUserRepository::new();
        repo.create(NewUser::new("Alice", "hash")).await.unwrap();
        assert!(repo.find_by_username("alice").await.unwrap().is_none());
        assert!(repo.find_by_username("Alice").await.unwrap().is_some());
    }
}
