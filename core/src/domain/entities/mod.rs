//! Domain entities.

pub mod employee;
pub mod user;

pub use employee::{Department, Employee, EmployeeUpdate};
pub use user::{NewUser, User};
