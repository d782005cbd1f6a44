//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ems_core::domain::entities::user::{NewUser, User};
use ems_core::errors::DomainError;
use ems_core::repositories::UserRepository;

use crate::database::map_sqlx_error;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository backed by the shared pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: row.try_get("id").map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?,
            username: row.try_get("username").map_err(|e| DomainError::Database {
                message: format!("Failed to get username: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let created_at = Utc::now();

        // The username unique index decides duplicates; no pre-check here.
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "username"))?;

        Ok(User {
            id: result.last_insert_id() as i64,
            username: user.username,
            password_hash: user.password_hash,
            created_at,
        })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}
