//! Employee record service: validated writes and unvalidated reads.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::domain::entities::employee::{Employee, EmployeeUpdate};
use crate::errors::DomainResult;
use crate::repositories::EmployeeRepository;

use super::validation;

/// Service for creating, reading, updating, and deleting employee records.
///
/// Writes run the validation rules first; uniqueness conflicts and missing
/// records are whatever the repository reports, propagated unchanged.
pub struct EmployeeService<E>
where
    E: EmployeeRepository,
{
    employee_repository: Arc<E>,
}

impl<E> EmployeeService<E>
where
    E: EmployeeRepository,
{
    /// Create a new employee service.
    pub fn new(employee_repository: Arc<E>) -> Self {
        Self {
            employee_repository,
        }
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Validate and persist a new employee record.
    pub async fn create(&self, employee: Employee) -> DomainResult<()> {
        validation::validate_for_create(&employee, Self::today())?;
        self.employee_repository.insert(&employee).await?;
        info!(employee_id = %employee.employee_id, "Employee created");
        Ok(())
    }

    /// Fetch all employee records.
    pub async fn list(&self) -> DomainResult<Vec<Employee>> {
        self.employee_repository.list().await
    }

    /// Fetch one employee record by id.
    pub async fn get(&self, employee_id: &str) -> DomainResult<Option<Employee>> {
        self.employee_repository.find_by_id(employee_id).await
    }

    /// Validate and apply an update to the record addressed by
    /// `employee_id`.
    pub async fn update(&self, employee_id: &str, update: EmployeeUpdate) -> DomainResult<()> {
        validation::validate_for_update(&update, Self::today())?;
        self.employee_repository.update(employee_id, &update).await?;
        info!(employee_id = %employee_id, "Employee updated");
        Ok(())
    }

    /// Delete the record addressed by `employee_id`.
    pub async fn delete(&self, employee_id: &str) -> DomainResult<()> {
        self.employee_repository.delete(employee_id).await?;
        info!(employee_id = %employee_id, "Employee deleted");
        Ok(())
    }
}
