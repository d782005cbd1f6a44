//! MySQL repository implementations.

mod employee_repository_impl;
mod user_repository_impl;

pub use employee_repository_impl::MySqlEmployeeRepository;
pub use user_repository_impl::MySqlUserRepository;
