use mockito::Mock;
use serde_json::Value;

use crate::fixtures::{error_body, json_response, stats::StatsFixtures};

impl<'a> StatsFixtures<'a> {
    /// Create a `GET /api/stats/summary` endpoint answering with `summary`.
    pub fn create_summary_endpoint(&mut self, summary: Value, expected_requests: usize) -> Mock {
        let mock = self.setup.server.mock("GET", "/api/stats/summary");
        let mock = self.setup.authorize(mock);

        json_response(mock, 200, &summary)
            .expect(expected_requests)
            .create()
    }

    /// Create a chart endpoint at `path` answering with `chart`.
    pub fn create_chart_endpoint(
        &mut self,
        path: &str,
        chart: Value,
        expected_requests: usize,
    ) -> Mock {
        let mock = self.setup.server.mock("GET", path);
        let mock = self.setup.authorize(mock);

        json_response(mock, 200, &chart)
            .expect(expected_requests)
            .create()
    }

    /// Create a chart endpoint at `path` answering 400, as the backend does when the
    /// company has no employees to plot.
    pub fn create_empty_chart_endpoint(&mut self, path: &str, expected_requests: usize) -> Mock {
        let mock = self.setup.server.mock("GET", path);
        let mock = self.setup.authorize(mock);

        json_response(mock, 400, &error_body("No employee data available"))
            .expect(expected_requests)
            .create()
    }
}
