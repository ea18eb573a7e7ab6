//! Factories for backend payloads and the mock endpoints serving them.
//!
//! - `auth` - registration and token issuance
//! - `employee` - employee CRUD and CSV export
//! - `department` - department listing and creation
//! - `stats` - summary statistics and rendered charts

pub mod auth;
pub mod department;
pub mod employee;
pub mod stats;

use mockito::Mock;

use crate::TestSetup;

/// Finish a mock answering with a JSON body.
pub(crate) fn json_response(mock: Mock, status: usize, body: &serde_json::Value) -> Mock {
    mock.with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
}

/// FastAPI style error body.
pub fn error_body(detail: &str) -> serde_json::Value {
    serde_json::json!({ "detail": detail })
}

impl TestSetup {
    pub fn auth<'a>(&'a mut self) -> auth::AuthFixtures<'a> {
        auth::AuthFixtures { setup: self }
    }

    pub fn employee<'a>(&'a mut self) -> employee::EmployeeFixtures<'a> {
        employee::EmployeeFixtures { setup: self }
    }

    pub fn department<'a>(&'a mut self) -> department::DepartmentFixtures<'a> {
        department::DepartmentFixtures { setup: self }
    }

    pub fn stats<'a>(&'a mut self) -> stats::StatsFixtures<'a> {
        stats::StatsFixtures { setup: self }
    }
}
