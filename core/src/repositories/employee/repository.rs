//! Employee repository trait defining the interface for record persistence.

use async_trait::async_trait;

use crate::domain::entities::employee::{Employee, EmployeeUpdate};
use crate::errors::DomainError;

/// Repository contract for `Employee` persistence.
///
/// Uniqueness of `employee_id` and `email` is enforced by the backing
/// store's primary-key/unique-index mechanism. Implementations issue the
/// write and map the backend's violation signal to
/// `DomainError::DuplicateKey`; they must not pre-check and insert, which
/// would race between concurrent writers.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee record.
    ///
    /// # Returns
    /// * `Ok(())` - Record persisted
    /// * `Err(DomainError::DuplicateKey)` - `employee_id` or `email` collided
    /// * `Err(DomainError::Database)` - The storage call failed
    async fn insert(&self, employee: &Employee) -> Result<(), DomainError>;

    /// Fetch one record by its `employee_id`. Reads apply no validation.
    async fn find_by_id(&self, employee_id: &str) -> Result<Option<Employee>, DomainError>;

    /// Fetch all records. Reads apply no validation.
    async fn list(&self) -> Result<Vec<Employee>, DomainError>;

    /// Replace the mutable fields of the record addressed by `employee_id`.
    ///
    /// `employee_id` and `date_of_birth` are never rewritten. Zero affected
    /// rows yields `NotFound`; the store does not distinguish "never
    /// existed" from "a concurrent delete won".
    async fn update(&self, employee_id: &str, update: &EmployeeUpdate) -> Result<(), DomainError>;

    /// Delete the record addressed by `employee_id`. Zero affected rows
    /// yields `NotFound`.
    async fn delete(&self, employee_id: &str) -> Result<(), DomainError>;
}
