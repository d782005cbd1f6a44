//! DTOs for the employee record endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ems_core::domain::entities::employee::{Department, Employee, EmployeeUpdate};

/// Request body for POST /employees: the full 8-field record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployeeRequest {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub department: Department,
    pub role: String,
    pub date_of_joining: NaiveDate,
    pub date_of_birth: NaiveDate,
}

impl From<CreateEmployeeRequest> for Employee {
    fn from(request: CreateEmployeeRequest) -> Self {
        Employee {
            employee_id: request.employee_id,
            name: request.name,
            email: request.email,
            phone_number: request.phone_number,
            department: request.department,
            role: request.role,
            date_of_joining: request.date_of_joining,
            date_of_birth: request.date_of_birth,
        }
    }
}

/// Request body for PUT /employees/{id}: the seven mutable-slot fields.
///
/// `employee_id` travels in the payload but the path parameter addresses
/// the row; `date_of_birth` is absent because it is immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub department: Department,
    pub role: String,
    pub date_of_joining: NaiveDate,
}

impl From<UpdateEmployeeRequest> for EmployeeUpdate {
    fn from(request: UpdateEmployeeRequest) -> Self {
        EmployeeUpdate {
            employee_id: request.employee_id,
            name: request.name,
            email: request.email,
            phone_number: request.phone_number,
            department: request.department,
            role: request.role,
            date_of_joining: request.date_of_joining,
        }
    }
}

/// Response body for a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeResponse {
    pub message: String,
    #[serde(rename = "employeeId")]
    pub employee_id: String,
}
