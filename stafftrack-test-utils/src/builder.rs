//! Declarative mock backend setup.
//!
//! The builder queues endpoints and creates them all during `build()`. Every endpoint
//! carries an expected request count that `TestSetup::assert_mocks` verifies afterwards.

use mockito::{Mock, ServerGuard};
use serde_json::Value;

use crate::{
    constant::{TEST_PASSWORD, TEST_TOKEN, TEST_USERNAME},
    fixtures::{auth::factory as auth_factory, stats},
    TestSetup,
};

type EndpointBuilder = Box<dyn FnOnce(&mut TestSetup) -> Mock>;

/// Builder for a mock backend.
///
/// Methods can be chained together and finalized with `build()`.
#[derive(Default)]
pub struct TestBuilder {
    bearer: Option<String>,

    // Raw mocks, created before the fixture endpoints
    mock_builders: Vec<Box<dyn FnOnce(&mut ServerGuard) -> Mock>>,

    endpoints: Vec<EndpointBuilder>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `Authorization: Bearer <token>` on every resource endpoint.
    ///
    /// Requests without the header, or with another token, match no endpoint and receive
    /// mockito's 501.
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Add `POST /auth/login` accepting the standard test credentials.
    ///
    /// # Arguments
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_login_endpoint(self, expected_requests: usize) -> Self {
        self.with_endpoint(move |setup| {
            setup.auth().create_login_endpoint(
                TEST_USERNAME,
                TEST_PASSWORD,
                TEST_TOKEN,
                expected_requests,
            )
        })
    }

    /// Add `POST /auth/login` rejecting every attempt with 401.
    pub fn with_login_rejected_endpoint(self, expected_requests: usize) -> Self {
        self.with_endpoint(move |setup| setup.auth().create_login_rejected_endpoint(expected_requests))
    }

    /// Add `POST /auth/register` accepting the standard test registration.
    pub fn with_register_endpoint(self, expected_requests: usize) -> Self {
        self.with_endpoint(move |setup| {
            setup.auth().create_register_endpoint(
                auth_factory::registration(),
                200,
                auth_factory::user_profile(1),
                expected_requests,
            )
        })
    }

    /// Add `GET /api/employees` answering with `employees`.
    pub fn with_employees_endpoint(self, employees: Vec<Value>, expected_requests: usize) -> Self {
        self.with_endpoint(move |setup| {
            setup
                .employee()
                .create_list_endpoint(employees, expected_requests)
        })
    }

    /// Add `POST /api/employees` matching `payload` exactly.
    pub fn with_create_employee_endpoint(
        self,
        payload: Value,
        created: Value,
        expected_requests: usize,
    ) -> Self {
        self.with_endpoint(move |setup| {
            setup
                .employee()
                .create_create_endpoint(payload, created, expected_requests)
        })
    }

    /// Add `PUT /api/employees/{id}` matching `payload` exactly.
    pub fn with_update_employee_endpoint(
        self,
        id: i64,
        payload: Value,
        updated: Value,
        expected_requests: usize,
    ) -> Self {
        self.with_endpoint(move |setup| {
            setup
                .employee()
                .create_update_endpoint(id, payload, updated, expected_requests)
        })
    }

    /// Add `DELETE /api/employees/{id}`.
    pub fn with_delete_employee_endpoint(self, id: i64, expected_requests: usize) -> Self {
        self.with_endpoint(move |setup| {
            setup
                .employee()
                .create_delete_endpoint(id, expected_requests)
        })
    }

    /// Add `GET /api/employees/export` answering with `csv`.
    pub fn with_export_endpoint(self, csv: impl Into<String>, expected_requests: usize) -> Self {
        let csv = csv.into();
        self.with_endpoint(move |setup| {
            setup
                .employee()
                .create_export_endpoint(&csv, expected_requests)
        })
    }

    /// Add `GET /api/departments` answering with `departments`.
    pub fn with_departments_endpoint(
        self,
        departments: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.with_endpoint(move |setup| {
            setup
                .department()
                .create_list_endpoint(departments, expected_requests)
        })
    }

    /// Add `POST /api/departments` expecting `{"name": name}`.
    pub fn with_create_department_endpoint(
        self,
        name: impl Into<String>,
        created: Value,
        expected_requests: usize,
    ) -> Self {
        let name = name.into();
        self.with_endpoint(move |setup| {
            setup
                .department()
                .create_create_endpoint(&name, created, expected_requests)
        })
    }

    /// Add `GET /api/stats/summary` answering with `summary`.
    pub fn with_summary_endpoint(self, summary: Value, expected_requests: usize) -> Self {
        self.with_endpoint(move |setup| {
            setup
                .stats()
                .create_summary_endpoint(summary, expected_requests)
        })
    }

    /// Add both chart endpoints, each answering with a valid image.
    pub fn with_chart_endpoints(self, expected_requests: usize) -> Self {
        self.with_endpoint(move |setup| {
            setup.stats().create_chart_endpoint(
                stats::SALARY_CHART_PATH,
                stats::factory::chart(),
                expected_requests,
            )
        })
        .with_endpoint(move |setup| {
            setup.stats().create_chart_endpoint(
                stats::DEPARTMENT_CHART_PATH,
                stats::factory::chart(),
                expected_requests,
            )
        })
    }

    /// Add both chart endpoints, each answering 400 for lack of data.
    pub fn with_empty_chart_endpoints(self, expected_requests: usize) -> Self {
        self.with_endpoint(move |setup| {
            setup
                .stats()
                .create_empty_chart_endpoint(stats::SALARY_CHART_PATH, expected_requests)
        })
        .with_endpoint(move |setup| {
            setup
                .stats()
                .create_empty_chart_endpoint(stats::DEPARTMENT_CHART_PATH, expected_requests)
        })
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock server and create every queued endpoint.
    ///
    /// Custom endpoints are created before the fixture endpoints.
    pub async fn build(self) -> TestSetup {
        let mut setup = TestSetup::new().await;
        setup.bearer = self.bearer;

        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for endpoint in self.endpoints {
            mocks.push(endpoint(&mut setup));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        setup
    }

    fn with_endpoint<F>(mut self, endpoint: F) -> Self
    where
        F: FnOnce(&mut TestSetup) -> Mock + 'static,
    {
        self.endpoints.push(Box::new(endpoint));
        self
    }
}
