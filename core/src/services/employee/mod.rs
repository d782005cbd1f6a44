//! Employee record operations and validation.

mod service;
pub mod validation;

pub use service::EmployeeService;
