//! Mapping from domain errors onto HTTP responses.

use actix_web::HttpResponse;

use ems_core::errors::{AuthError, DomainError, TokenError};
use ems_shared::types::response::ErrorResponse;

/// Convert a domain error into the HTTP response the client sees.
///
/// Every rejection carries a short human-readable message; driver and
/// infrastructure detail stays in the log. A duplicate employee write names
/// both unique fields even when only one collided, matching the storage
/// layer's inability to say which index fired first.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation(validation_error) => {
            log::warn!(
                "Validation rejected request on {}: {}",
                validation_error.field(),
                validation_error
            );
            HttpResponse::BadRequest().json(ErrorResponse::new(
                "validation_failed",
                validation_error.to_string(),
            ))
        }

        DomainError::DuplicateKey { field } => {
            log::warn!("Duplicate key on field: {}", field);
            HttpResponse::BadRequest().json(ErrorResponse::new(
                "duplicate_key",
                "Duplicate data detected: Employee ID or Email already exists.",
            ))
        }

        DomainError::Auth(AuthError::UserAlreadyExists) => {
            HttpResponse::Conflict().json(ErrorResponse::new(
                "username_taken",
                AuthError::UserAlreadyExists.to_string(),
            ))
        }

        DomainError::Auth(AuthError::InvalidCredentials) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(
                "invalid_credentials",
                AuthError::InvalidCredentials.to_string(),
            ))
        }

        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{} not found.", resource),
        )),

        DomainError::Unauthenticated => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "unauthenticated",
            "Authentication required.",
        )),

        DomainError::Forbidden
        | DomainError::Token(TokenError::TokenExpired)
        | DomainError::Token(TokenError::InvalidToken) => {
            HttpResponse::Forbidden().json(ErrorResponse::new(
                "forbidden",
                "Invalid or expired token.",
            ))
        }

        DomainError::Token(TokenError::TokenGenerationFailed)
        | DomainError::Database { .. }
        | DomainError::Internal { .. } => {
            log::error!("Internal error: {:?}", error);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred.",
            ))
        }
    }
}
