//! MySQL implementation of the EmployeeRepository trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{MySqlPool, Row};

use ems_core::domain::entities::employee::{Department, Employee, EmployeeUpdate};
use ems_core::errors::DomainError;
use ems_core::repositories::EmployeeRepository;

use crate::database::map_sqlx_error;

const EMPLOYEE_COLUMNS: &str = "employee_id, name, email, phone_number, department, role, \
     date_of_joining, date_of_birth";

/// MySQL implementation of EmployeeRepository
pub struct MySqlEmployeeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    /// Create a new MySQL employee repository backed by the shared pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_employee(row: &sqlx::mysql::MySqlRow) -> Result<Employee, DomainError> {
        let department_str: String =
            row.try_get("department").map_err(|e| DomainError::Database {
                message: format!("Failed to get department: {}", e),
            })?;
        let department: Department =
            department_str
                .parse()
                .map_err(|e: String| DomainError::Database {
                    message: format!("Invalid department in storage: {}", e),
                })?;

        Ok(Employee {
            employee_id: row
                .try_get("employee_id")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get employee_id: {}", e),
                })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get phone_number: {}", e),
                })?,
            department,
            role: row.try_get("role").map_err(|e| DomainError::Database {
                message: format!("Failed to get role: {}", e),
            })?,
            date_of_joining: row
                .try_get::<NaiveDate, _>("date_of_joining")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get date_of_joining: {}", e),
                })?,
            date_of_birth: row
                .try_get::<NaiveDate, _>("date_of_birth")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get date_of_birth: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn insert(&self, employee: &Employee) -> Result<(), DomainError> {
        // Both unique keys (primary key and email index) are enforced by
        // the write itself; a violation on either surfaces as DuplicateKey.
        sqlx::query(
            r#"
            INSERT INTO employees (employee_id, name, email, phone_number,
                                   department, role, date_of_joining, date_of_birth)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&employee.employee_id)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.phone_number)
        .bind(employee.department.to_string())
        .bind(&employee.role)
        .bind(employee.date_of_joining)
        .bind(employee.date_of_birth)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "employee_id or email"))?;

        Ok(())
    }

    async fn find_by_id(&self, employee_id: &str) -> Result<Option<Employee>, DomainError> {
        let query = format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE employee_id = ? LIMIT 1"
        );

        let result = sqlx::query(&query)
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_employee(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Employee>, DomainError> {
        let query = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_employee).collect()
    }

    async fn update(&self, employee_id: &str, update: &EmployeeUpdate) -> Result<(), DomainError> {
        // The key and date_of_birth columns are deliberately absent from
        // the SET list: both are immutable after creation.
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = ?, email = ?, phone_number = ?, department = ?,
                role = ?, date_of_joining = ?
            WHERE employee_id = ?
            "#,
        )
        .bind(&update.name)
        .bind(&update.email)
        .bind(&update.phone_number)
        .bind(update.department.to_string())
        .bind(&update.role)
        .bind(update.date_of_joining)
        .bind(employee_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "email"))?;

        // MySQL counts a matched-but-unchanged row as 0 affected, so 0
        // alone does not mean the row is missing. An update that changes
        // nothing still succeeds.
        if result.rows_affected() == 0 && self.find_by_id(employee_id).await?.is_none() {
            return Err(DomainError::NotFound {
                resource: "Employee".to_string(),
            });
        }
        Ok(())
    }

    async fn delete(&self, employee_id: &str) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Employee".to_string(),
            });
        }
        Ok(())
    }
}
