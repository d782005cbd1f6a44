//! Handler for DELETE /employees/{id}.

use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use ems_core::repositories::{EmployeeRepository, UserRepository};
use ems_shared::types::response::MessageResponse;

/// Delete the record addressed by the path. The id is never reused.
pub async fn delete<U, E>(
    state: web::Data<AppState<U, E>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let employee_id = path.into_inner();

    match state.employee_service.delete(&employee_id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Employee deleted successfully.")),
        Err(e) => handle_domain_error(e),
    }
}
