//! Mock endpoints under `/api/employees`. All of them honour the setup's bearer token.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::fixtures::{employee::EmployeeFixtures, json_response};

impl<'a> EmployeeFixtures<'a> {
    /// Create a `GET /api/employees` endpoint answering with `employees`.
    pub fn create_list_endpoint(&mut self, employees: Vec<Value>, expected_requests: usize) -> Mock {
        let mock = self.setup.server.mock("GET", "/api/employees");
        let mock = self.setup.authorize(mock);

        json_response(mock, 200, &Value::Array(employees))
            .expect(expected_requests)
            .create()
    }

    /// Create a `POST /api/employees` endpoint expecting `payload` as its JSON body.
    ///
    /// # Arguments
    /// - `payload` - Exact JSON body the endpoint matches
    /// - `created` - Employee returned to the caller
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_create_endpoint(
        &mut self,
        payload: Value,
        created: Value,
        expected_requests: usize,
    ) -> Mock {
        let mock = self
            .setup
            .server
            .mock("POST", "/api/employees")
            .match_body(Matcher::Json(payload));
        let mock = self.setup.authorize(mock);

        json_response(mock, 200, &created)
            .expect(expected_requests)
            .create()
    }

    /// Create a `PUT /api/employees/{id}` endpoint expecting `payload` as its JSON body.
    pub fn create_update_endpoint(
        &mut self,
        id: i64,
        payload: Value,
        updated: Value,
        expected_requests: usize,
    ) -> Mock {
        let mock = self
            .setup
            .server
            .mock("PUT", format!("/api/employees/{}", id).as_str())
            .match_body(Matcher::Json(payload));
        let mock = self.setup.authorize(mock);

        json_response(mock, 200, &updated)
            .expect(expected_requests)
            .create()
    }

    /// Create a `DELETE /api/employees/{id}` endpoint.
    pub fn create_delete_endpoint(&mut self, id: i64, expected_requests: usize) -> Mock {
        let mock = self
            .setup
            .server
            .mock("DELETE", format!("/api/employees/{}", id).as_str());
        let mock = self.setup.authorize(mock);

        json_response(mock, 200, &json!({ "message": "Employee deleted" }))
            .expect(expected_requests)
            .create()
    }

    /// Create a `GET /api/employees/export` endpoint answering with `csv`.
    pub fn create_export_endpoint(&mut self, csv: &str, expected_requests: usize) -> Mock {
        let mock = self.setup.server.mock("GET", "/api/employees/export");

        self.setup
            .authorize(mock)
            .with_status(200)
            .with_header("content-type", "text/csv")
            .with_body(csv)
            .expect(expected_requests)
            .create()
    }
}
