//! Handler for POST /register.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::RegisterRequest;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use ems_core::repositories::{EmployeeRepository, UserRepository};
use ems_shared::types::response::{ErrorResponse, MessageResponse};

/// Register a new user account.
///
/// Responds `201` on success, `400` for empty credentials, and `409` when
/// the username is already taken.
pub async fn register<U, E>(
    state: web::Data<AppState<U, E>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EmployeeRepository + 'static,
{
    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "validation_failed",
            "Username and password are required.",
        ));
    }

    match state
        .auth_service
        .register(&request.username, &request.password)
        .await
    {
        Ok(()) => HttpResponse::Created()
            .json(MessageResponse::new("User registered successfully.")),
        Err(e) => handle_domain_error(e),
    }
}
