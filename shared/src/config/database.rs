//! Database configuration module

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Database configuration for the MySQL connection pool
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://localhost:3306/employees"),
            max_connections: 10,
            connect_timeout: 30,
        }
    }
}

impl DatabaseConfig {
    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Load the database configuration from environment variables.
    ///
    /// `DATABASE_URL` is mandatory; pool tuning variables fall back to
    /// their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingVariable {
                name: "DATABASE_URL".to_string(),
            })?;

        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);
        let connect_timeout = std::env::var("DATABASE_CONNECT_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Ok(Self {
            url,
            max_connections,
            connect_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    // One test owns the DATABASE_URL variable end to end; splitting these
    // cases up would race under the parallel test runner.
    #[test]
    fn test_from_env_refuses_missing_or_blank_url() {
        std::env::remove_var("DATABASE_URL");
        assert!(matches!(
            DatabaseConfig::from_env(),
            Err(ConfigError::MissingVariable { name }) if name == "DATABASE_URL"
        ));

        std::env::set_var("DATABASE_URL", "");
        assert!(matches!(
            DatabaseConfig::from_env(),
            Err(ConfigError::MissingVariable { .. })
        ));

        std::env::set_var("DATABASE_URL", "mysql://localhost:3306/employees");
        let config = DatabaseConfig::from_env().unwrap();
        assert_eq!(config.url, "mysql://localhost:3306/employees");
        assert_eq!(config.max_connections, 10);
        std::env::remove_var("DATABASE_URL");
    }
}
