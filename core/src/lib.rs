//! Core domain layer for the employee management backend.
//!
//! Contains the domain entities (users and employee records), the pure
//! validation rules for employee records, password hashing, JWT issuance and
//! verification, and the repository traits implemented by the infrastructure
//! layer. Nothing in this crate touches HTTP or a concrete database.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

pub use errors::{DomainError, DomainResult};
