//! Mock implementation of EmployeeRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::employee::{Employee, EmployeeUpdate};
use crate::errors::DomainError;

use super::repository::EmployeeRepository;

/// In-memory employee repository for tests.
///
/// Both unique keys (`employee_id`, `email`) are checked inside the write
/// lock so concurrent conflicting inserts resolve the way the real store's
/// unique indexes do: exactly one write wins.
pub struct MockEmployeeRepository {
    employees: Arc<RwLock<HashMap<String, Employee>>>,
}

impl MockEmployeeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            employees: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
    async fn insert(&self, employee: &Employee) -> Result<(), DomainError> {
        let mut employees = self.employees.write().await;

        if employees.contains_key(&employee.employee_id) {
            return Err(DomainError::DuplicateKey {
                field: "employee_id".to_string(),
            });
        }
        if employees.values().any(|e| e.email == employee.email) {
            return Err(DomainError::DuplicateKey {
                field: "email".to_string(),
            });
        }

        employees.insert(employee.employee_id.clone(), employee.clone());
        Ok(())
    }

    async fn find_by_id(&self, employee_id: &str) -> Result<Option<Employee>, DomainError> {
        let employees = self.employees.read().await;
        Ok(employees.get(employee_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Employee>, DomainError> {
        let employees = self.employees.read().await;
        Ok(employees.values().cloned().collect())
    }

    async fn update(&self, employee_id: &str, update: &EmployeeUpdate) -> Result<(), DomainError> {
        let mut employees = self.employees.write().await;

        if employees
            .values()
            .any(|e| e.email == update.email && e.employee_id != employee_id)
        {
            return Err(DomainError::DuplicateKey {
                field: "email".to_string(),
            });
        }

        match employees.get_mut(employee_id) {
            Some(employee) => {
                employee.apply_update(update);
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: "Employee".to_string(),
            }),
        }
    }

    async fn delete(&self, employee_id: &str) -> Result<(), DomainError> {
        let mut employees = self.employees.write().await;
        match employees.remove(employee_id) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound {
                resource: "Employee".to_string(),
            }),
        }
    }
}
