use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub salary: f64,
    pub join_date: NaiveDate,
    pub department_id: i64,
    /// Resolved by the backend on list and update responses.
    #[serde(default)]
    pub department_name: Option<String>,
}

/// Body of `POST /api/employees` and `PUT /api/employees/{id}`.
///
/// Updates are full replacements, so both use the same shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeePayload {
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub salary: f64,
    pub join_date: NaiveDate,
    pub department_id: i64,
}
