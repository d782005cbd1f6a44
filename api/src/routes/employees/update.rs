//! Handler for PUT /employees/{id}.

use actix_web::{web, HttpResponse};

use crate::dto::employee::UpdateEmployeeRequest;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use ems_core::domain::entities::employee::EmployeeUpdate;
use ems_core::repositories::{EmployeeRepository, UserRepository};
use ems_shared::types::response::MessageResponse;

/// Replace the seven mutable fields of the record addressed by the path.
///
/// The path parameter, not the payload's `employee_id`, decides which row
/// is touched; `date_of_birth` is never rewritten.
pub async fn update<U, E>(
    state: web::Data<AppState<U, E>>,
    path: web::Path<String>,
    request: web::Json<UpdateEmployeeRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let employee_id = path.into_inner();
    let update: EmployeeUpdate = request.into_inner().into();

    match state.employee_service.update(&employee_id, update).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Employee updated successfully.")),
        Err(e) => handle_domain_error(e),
    }
}
