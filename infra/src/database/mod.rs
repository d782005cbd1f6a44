//! Database connection pool and schema bootstrap.

pub mod mysql;

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use ems_core::errors::DomainError;
use ems_shared::config::DatabaseConfig;

/// Create the process-wide MySQL connection pool.
///
/// The pool is shared read/write by every request; no explicit transaction
/// spans multiple logical operations in this core.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database pool created"
    );
    Ok(pool)
}

/// Idempotently create the two tables the core persists into.
///
/// Uniqueness lives here: `users.username` carries a unique index,
/// `employees.employee_id` is the primary key and `employees.email` is
/// unique. Conflicting writes are decided by these indexes, not by
/// application-side pre-checks.
pub async fn init_schema(pool: &MySqlPool) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            username VARCHAR(255) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL,
            created_at DATETIME NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| DomainError::Database {
        message: format!("Failed to create users table: {}", e),
    })?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            employee_id VARCHAR(10) NOT NULL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            phone_number VARCHAR(10) NOT NULL,
            department VARCHAR(100) NOT NULL,
            role VARCHAR(100) NOT NULL,
            date_of_joining DATE NOT NULL,
            date_of_birth DATE NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| DomainError::Database {
        message: format!("Failed to create employees table: {}", e),
    })?;

    info!("Database schema ready");
    Ok(())
}

/// Map a sqlx error onto the domain taxonomy: a violated unique index
/// becomes `DuplicateKey`, everything else is a storage failure.
pub(crate) fn map_sqlx_error(error: sqlx::Error, field: &str) -> DomainError {
    if let sqlx::Error::Database(db_error) = &error {
        if db_error.is_unique_violation() {
            return DomainError::DuplicateKey {
                field: field.to_string(),
            };
        }
    }
    DomainError::Database {
        message: format!("Database query failed: {}", error),
    }
}
