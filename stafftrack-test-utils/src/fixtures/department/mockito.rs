use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::fixtures::{department::DepartmentFixtures, json_response};

impl<'a> DepartmentFixtures<'a> {
    /// Create a `GET /api/departments` endpoint answering with `departments`.
    pub fn create_list_endpoint(
        &mut self,
        departments: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let mock = self.setup.server.mock("GET", "/api/departments");
        let mock = self.setup.authorize(mock);

        json_response(mock, 200, &Value::Array(departments))
            .expect(expected_requests)
            .create()
    }

    /// Create a `POST /api/departments` endpoint expecting `{"name": name}`.
    pub fn create_create_endpoint(
        &mut self,
        name: &str,
        created: Value,
        expected_requests: usize,
    ) -> Mock {
        let mock = self
            .setup
            .server
            .mock("POST", "/api/departments")
            .match_body(Matcher::Json(json!({ "name": name })));
        let mock = self.setup.authorize(mock);

        json_response(mock, 200, &created)
            .expect(expected_requests)
            .create()
    }
}
