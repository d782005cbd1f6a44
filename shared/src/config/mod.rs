//! Environment-driven configuration modules.

pub mod auth;
pub mod database;
pub mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

use thiserror::Error;

/// Errors raised while assembling configuration at startup.
///
/// These are fatal: the process refuses to start with incomplete or
/// malformed configuration rather than running with insecure defaults.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {name}")]
    MissingVariable { name: String },

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}
