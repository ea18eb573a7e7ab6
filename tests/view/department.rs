//! Tests for DepartmentRoster.

use stafftrack::{
    error::{FormError, REFRESH_FAILED},
    view::{DepartmentForm, DepartmentRoster, ViewPhase},
    Error,
};
use stafftrack_test_utils::prelude::*;

use crate::util::TestClient;

/// Tests the initial load.
///
/// Expected: Ok with the company's departments
#[tokio::test]
async fn loads_departments() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_bearer(TEST_TOKEN)
        .with_departments_endpoint(
            vec![
                department_factory::department(1, "Engineering"),
                department_factory::department(2, "Research"),
            ],
            1,
        )
        .build()
        .await;
    let client = TestClient::signed_in(&test);

    let departments = DepartmentRoster::new(&client.gateway)
        .load(|_| {})
        .await?;

    assert_eq!(departments.len(), 2);
    assert_eq!(departments[1].name, "Research");
    assert_eq!(departments[1].company_name, TEST_COMPANY);
    test.assert_mocks();

    Ok(())
}

/// Tests adding a department.
///
/// Verifies that the trimmed name is posted once and the list is re-read once.
///
/// Expected: Ok with the refreshed list, phases Saving, Refreshing, Idle
#[tokio::test]
async fn add_posts_once_then_refreshes_once() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_bearer(TEST_TOKEN)
        .with_create_department_endpoint(
            "Finance",
            department_factory::department(3, "Finance"),
            1,
        )
        .with_departments_endpoint(vec![department_factory::department(3, "Finance")], 1)
        .build()
        .await;
    let client = TestClient::signed_in(&test);
    let form = DepartmentForm {
        name: "  Finance ".to_string(),
    };
    let mut phases = Vec::new();

    let departments = DepartmentRoster::new(&client.gateway)
        .add(&form, |phase| phases.push(phase))
        .await?;

    assert_eq!(departments.len(), 1);
    assert_eq!(
        phases,
        vec![ViewPhase::Saving, ViewPhase::Refreshing, ViewPhase::Idle]
    );
    test.assert_mocks();

    Ok(())
}

/// Tests that a blank name is refused locally.
///
/// Expected: Err(FormError::Missing), no requests
#[tokio::test]
async fn blank_name_sends_nothing() {
    let test = TestBuilder::new()
        .with_departments_endpoint(Vec::new(), 0)
        .build()
        .await;
    let client = TestClient::signed_in(&test);
    let form = DepartmentForm {
        name: "   ".to_string(),
    };

    let result = DepartmentRoster::new(&client.gateway)
        .add(&form, |_| {})
        .await;

    assert!(matches!(
        result,
        Err(Error::FormError(FormError::Missing(_)))
    ));
    test.assert_mocks();
}

/// Tests a department that is created when the following list refresh fails.
///
/// Expected: Err(Error::RefreshError) with the reload message
#[tokio::test]
async fn failed_refresh_after_add_is_reported_separately() {
    let test = TestBuilder::new()
        .with_create_department_endpoint(
            "Finance",
            department_factory::department(3, "Finance"),
            1,
        )
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/departments")
                .with_status(500)
                .expect(1)
                .create()
        })
        .build()
        .await;
    let client = TestClient::signed_in(&test);
    let form = DepartmentForm {
        name: "Finance".to_string(),
    };

    let err = DepartmentRoster::new(&client.gateway)
        .add(&form, |_| {})
        .await
        .unwrap_err();

    assert!(matches!(err, Error::RefreshError(_)));
    assert_eq!(err.user_message("Could not add department."), REFRESH_FAILED);
    test.assert_mocks();
}
