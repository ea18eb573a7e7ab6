//! Tests for the Dashboard loader.
//!
//! This module verifies that the summary and both charts are fetched on each load, that
//! charts the backend cannot draw are reported as absent, and that other failures fail
//! the load.

use stafftrack::{error::ApiError, view::Dashboard, Error};
use stafftrack_test_utils::prelude::*;

use crate::util::TestClient;

/// Tests a dashboard with data.
///
/// Expected: Ok with the summary figures and both charts present
#[tokio::test]
async fn loads_summary_and_charts() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_bearer(TEST_TOKEN)
        .with_summary_endpoint(
            stats_factory::summary(2, &[40000.0, 60000.0], &[("Engineering", 2)]),
            1,
        )
        .with_chart_endpoints(1)
        .build()
        .await;
    let client = TestClient::signed_in(&test);

    let data = Dashboard::new(&client.gateway).load().await?;

    assert_eq!(data.summary.total_employees, 2);
    assert_eq!(data.summary.average_salary, 50000.0);
    assert_eq!(data.summary.min_salary, 40000.0);
    assert_eq!(data.summary.max_salary, 60000.0);
    assert_eq!(data.summary.employees_by_dept.get("Engineering"), Some(&2));

    let chart = data.salary_chart.expect("salary chart");
    assert!(chart.data_uri().starts_with("data:image/png;base64,"));
    assert_eq!(&chart.png_bytes().unwrap()[1..4], b"PNG");
    assert!(data.department_chart.is_some());
    test.assert_mocks();

    Ok(())
}

/// Tests a company without employees.
///
/// Expected: Ok with zeroed summary and both charts absent
#[tokio::test]
async fn empty_company_has_no_charts() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_summary_endpoint(stats_factory::summary(0, &[], &[]), 1)
        .with_empty_chart_endpoints(1)
        .build()
        .await;
    let client = TestClient::signed_in(&test);

    let data = Dashboard::new(&client.gateway).load().await?;

    assert_eq!(data.summary.total_employees, 0);
    assert!(data.summary.employees_by_dept.is_empty());
    assert!(data.salary_chart.is_none());
    assert!(data.department_chart.is_none());
    test.assert_mocks();

    Ok(())
}

/// Tests each visit refetching everything.
///
/// Expected: two loads issue two requests to every endpoint
#[tokio::test]
async fn reloads_on_every_visit() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_summary_endpoint(stats_factory::summary(0, &[], &[]), 2)
        .with_chart_endpoints(2)
        .build()
        .await;
    let client = TestClient::signed_in(&test);

    Dashboard::new(&client.gateway).load().await?;
    Dashboard::new(&client.gateway).load().await?;

    test.assert_mocks();

    Ok(())
}

/// Tests a chart whose image does not decode.
///
/// Expected: Err(ApiError::Decode)
#[tokio::test]
async fn undecodable_chart_fails_load() {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/charts/salary_distribution")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"image_base64": "data:image/png;base64,not base64!"}"#)
                .create()
        })
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/charts/department_pie")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(stats_factory::chart().to_string())
                .create()
        })
        .with_summary_endpoint(stats_factory::summary(0, &[], &[]), 1)
        .build()
        .await;
    let client = TestClient::signed_in(&test);

    let result = Dashboard::new(&client.gateway).load().await;

    assert!(matches!(result, Err(Error::ApiError(ApiError::Decode(_)))));
}

/// Tests a backend failure on the summary.
///
/// Expected: Err(ApiError::Server)
#[tokio::test]
async fn server_error_fails_load() {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/stats/summary")
                .with_status(500)
                .with_body("Internal Server Error")
                .create()
        })
        .with_chart_endpoints(1)
        .build()
        .await;
    let client = TestClient::signed_in(&test);

    let result = Dashboard::new(&client.gateway).load().await;

    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::Server { status: 500 }))
    ));
}
