//! Handler for GET /employees.

use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use ems_core::repositories::{EmployeeRepository, UserRepository};

/// Fetch every employee record.
pub async fn list<U, E>(state: web::Data<AppState<U, E>>) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EmployeeRepository + 'static,
{
    match state.employee_service.list().await {
        Ok(employees) => HttpResponse::Ok().json(employees),
        Err(e) => handle_domain_error(e),
    }
}
