//! Employee repository abstraction.

mod mock;
mod repository;

pub use mock::MockEmployeeRepository;
pub use repository::EmployeeRepository;
