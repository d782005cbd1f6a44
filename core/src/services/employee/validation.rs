//! Pure validation rules for employee records.
//!
//! Rules run in a fixed order and the first violation decides the reported
//! error: required fields, then the age rule, then format checks, then
//! temporal ordering, then (on create) the employee id shape. Reads are
//! never validated.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::entities::employee::{Employee, EmployeeUpdate};
use crate::errors::ValidationError;

/// Deliberately permissive email shape: word characters only around `@`
/// and a single dot. Hyphenated and multi-dot domains are rejected; callers
/// depend on this exact behaviour.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+@\w+\.\w+$").expect("valid regex"));

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").expect("valid regex"));

static EMPLOYEE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{1,10}$").expect("valid regex"));

/// Validate a candidate record for creation (all eight fields).
pub fn validate_for_create(employee: &Employee, today: NaiveDate) -> Result<(), ValidationError> {
    require_non_empty("employee_id", &employee.employee_id)?;
    require_non_empty("name", &employee.name)?;
    require_non_empty("email", &employee.email)?;
    require_non_empty("phone_number", &employee.phone_number)?;
    require_non_empty("role", &employee.role)?;

    check_adult(employee.date_of_birth, today)?;
    check_email(&employee.email)?;
    check_phone(&employee.phone_number)?;
    check_joining_date(employee.date_of_joining, today)?;

    if !EMPLOYEE_ID_RE.is_match(&employee.employee_id) {
        return Err(ValidationError::InvalidEmployeeId);
    }

    Ok(())
}

/// Validate an update (seven fields; `date_of_birth` is immutable and the
/// age rule does not re-run).
pub fn validate_for_update(update: &EmployeeUpdate, today: NaiveDate) -> Result<(), ValidationError> {
    require_non_empty("employee_id", &update.employee_id)?;
    require_non_empty("name", &update.name)?;
    require_non_empty("email", &update.email)?;
    require_non_empty("phone_number", &update.phone_number)?;
    require_non_empty("role", &update.role)?;

    check_email(&update.email)?;
    check_phone(&update.phone_number)?;
    check_joining_date(update.date_of_joining, today)?;

    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// The employee must have already turned 18: a plain year subtraction of 18
/// only passes when today is on or after the birthday's month-day in the
/// current year.
fn check_adult(date_of_birth: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    let age = today.year() - date_of_birth.year();
    let had_birthday_this_year =
        (today.month(), today.day()) >= (date_of_birth.month(), date_of_birth.day());

    if age > 18 || (age == 18 && had_birthday_this_year) {
        Ok(())
    } else {
        Err(ValidationError::UnderAge)
    }
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

fn check_phone(phone_number: &str) -> Result<(), ValidationError> {
    if !PHONE_RE.is_match(phone_number) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

/// Same-day joining is allowed; only strictly-future dates are rejected.
fn check_joining_date(date_of_joining: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if date_of_joining > today {
        return Err(ValidationError::JoiningDateInFuture);
    }
    Ok(())
}
