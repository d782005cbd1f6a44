//! Handler for POST /login.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use ems_core::repositories::{EmployeeRepository, UserRepository};
use ems_shared::types::response::ErrorResponse;

/// Authenticate a user and hand back a one-hour bearer token.
///
/// An unknown username and a wrong password produce the same `400`
/// response body.
pub async fn login<U, E>(
    state: web::Data<AppState<U, E>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.username, &request.password)
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(LoginResponse {
            message: "Login successful.".to_string(),
            token: outcome.token,
        }),
        Err(e) => handle_domain_error(e),
    }
}
