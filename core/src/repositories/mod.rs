//! Repository traits defining the persistence interface.
//!
//! Concrete implementations live in `ems_infra`; in-memory mocks for tests
//! live beside each trait.

pub mod employee;
pub mod user;

pub use employee::EmployeeRepository;
pub use user::UserRepository;
