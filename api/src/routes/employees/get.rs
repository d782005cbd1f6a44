//! Handler for GET /employees/{id}.

use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use ems_core::repositories::{EmployeeRepository, UserRepository};
use ems_shared::types::response::ErrorResponse;

/// Fetch one employee record by id.
pub async fn get<U, E>(
    state: web::Data<AppState<U, E>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let employee_id = path.into_inner();

    match state.employee_service.get(&employee_id).await {
        Ok(Some(employee)) => HttpResponse::Ok().json(employee),
        Ok(None) => HttpResponse::NotFound()
            .json(ErrorResponse::new("not_found", "Employee not found.")),
        Err(e) => handle_domain_error(e),
    }
}
