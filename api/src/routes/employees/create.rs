//! Handler for POST /employees.

use actix_web::{web, HttpResponse};

use crate::dto::employee::{CreateEmployeeRequest, CreateEmployeeResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use ems_core::domain::entities::employee::Employee;
use ems_core::repositories::{EmployeeRepository, UserRepository};

/// Create a new employee record from the full 8-field payload.
///
/// Validation failures and duplicate keys both answer `400`; the duplicate
/// message names both unique fields regardless of which one collided.
pub async fn create<U, E>(
    state: web::Data<AppState<U, E>>,
    request: web::Json<CreateEmployeeRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EmployeeRepository + 'static,
{
    let employee: Employee = request.into_inner().into();
    let employee_id = employee.employee_id.clone();

    match state.employee_service.create(employee).await {
        Ok(()) => HttpResponse::Created().json(CreateEmployeeResponse {
            message: "Employee added successfully.".to_string(),
            employee_id,
        }),
        Err(e) => handle_domain_error(e),
    }
}
