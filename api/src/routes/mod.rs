//! Route handlers and shared application state.

pub mod auth;
pub mod employees;

use std::sync::Arc;

use ems_core::repositories::{EmployeeRepository, UserRepository};
use ems_core::services::auth::AuthService;
use ems_core::services::employee::EmployeeService;

/// Shared services handed to every handler.
pub struct AppState<U, E>
where
    U: UserRepository,
    E: EmployeeRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub employee_service: Arc<EmployeeService<E>>,
}
