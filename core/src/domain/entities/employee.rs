//! Employee record entity and its department enumeration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of departments an employee can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "HR")]
    Hr,
    Engineering,
    Marketing,
    Sales,
    Finance,
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Department::Hr => "HR",
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Finance => "Finance",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HR" => Ok(Department::Hr),
            "Engineering" => Ok(Department::Engineering),
            "Marketing" => Ok(Department::Marketing),
            "Sales" => Ok(Department::Sales),
            "Finance" => Ok(Department::Finance),
            _ => Err(format!("Unknown department: {}", s)),
        }
    }
}

/// A complete employee record as created and stored.
///
/// `employee_id` is the primary key and is immutable after creation, as is
/// `date_of_birth`. Every other field is replaceable by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Primary key, 1-10 alphanumeric characters, never reused
    pub employee_id: String,
    pub name: String,
    /// Unique across all employees
    pub email: String,
    /// Exactly 10 decimal digits
    pub phone_number: String,
    pub department: Department,
    pub role: String,
    /// Must not be after the current date
    pub date_of_joining: NaiveDate,
    /// Immutable after creation; employee must have already turned 18
    pub date_of_birth: NaiveDate,
}

/// The seven fields an update supplies.
///
/// `date_of_birth` is omitted (immutable after creation). `employee_id` is
/// carried in the payload but the store never rewrites the key of the
/// addressed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub department: Department,
    pub role: String,
    pub date_of_joining: NaiveDate,
}

impl Employee {
    /// Applies an update in place, leaving `employee_id` and
    /// `date_of_birth` untouched.
    pub fn apply_update(&mut self, update: &EmployeeUpdate) {
        self.name = update.name.clone();
        self.email = update.email.clone();
        self.phone_number = update.phone_number.clone();
        self.department = update.department;
        self.role = update.role.clone();
        self.date_of_joining = update.date_of_joining;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employee() -> Employee {
        Employee {
            employee_id: "E001".to_string(),
            name: "Jordan Lee".to_string(),
            email: "jordan@example.com".to_string(),
            phone_number: "0412345678".to_string(),
            department: Department::Engineering,
            role: "Developer".to_string(),
            date_of_joining: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 1).unwrap(),
        }
    }

    #[test]
    fn test_department_round_trip() {
        for name in ["HR", "Engineering", "Marketing", "Sales", "Finance"] {
            let department: Department = name.parse().unwrap();
            assert_eq!(department.to_string(), name);
        }
    }

    #[test]
    fn test_department_serde_uses_display_names() {
        let json = serde_json::to_string(&Department::Hr).unwrap();
        assert_eq!(json, "\"HR\"");
        let parsed: Department = serde_json::from_str("\"Finance\"").unwrap();
        assert_eq!(parsed, Department::Finance);
    }

    #[test]
    fn test_unknown_department_rejected() {
        assert!("Legal".parse::<Department>().is_err());
        assert!(serde_json::from_str::<Department>("\"hr\"").is_err());
    }

    #[test]
    fn test_apply_update_preserves_immutable_fields() {
        let mut employee = sample_employee();
        let original_dob = employee.date_of_birth;

        let update = EmployeeUpdate {
            employee_id: "E001".to_string(),
            name: "Jordan A. Lee".to_string(),
            email: "jordan.lee@example.com".to_string(),
            phone_number: "0498765432".to_string(),
            department: Department::Sales,
            role: "Account Manager".to_string(),
            date_of_joining: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        employee.apply_update(&update);

        assert_eq!(employee.employee_id, "E001");
        assert_eq!(employee.date_of_birth, original_dob);
        assert_eq!(employee.name, "Jordan A. Lee");
        assert_eq!(employee.department, Department::Sales);
    }
}
