//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors.
///
/// This is the umbrella error every service and repository operation
/// returns. The API layer maps each variant onto an HTTP status and a short
/// human-readable message; internal detail (queries, driver errors) stays on
/// the server side of that boundary.
#[derive(Error, Debug)]
pub enum DomainError {
    /// A write would duplicate an existing unique key. Surfaced by the
    /// storage backend's unique-index mechanism, never by a pre-check.
    #[error("Duplicate value for unique field: {field}")]
    DuplicateKey { field: String },

    /// The operation targets a record that does not exist (or that a
    /// concurrent delete already removed; the store does not distinguish).
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// No identity could be established for the request.
    #[error("Unauthenticated")]
    Unauthenticated,

    /// An identity was presented but rejected.
    #[error("Forbidden")]
    Forbidden,

    /// Storage backend connection or query failure, fatal to the request.
    #[error("Database error: {message}")]
    Database { message: String },

    /// Infrastructure failure (hashing, signing); fatal to the request.
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
