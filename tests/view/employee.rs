//! Tests for EmployeeRoster.
//!
//! This module verifies that every mutation issues exactly one request followed by
//! exactly one re-read of the employee list, that invalid forms and declined deletes send
//! nothing, and that failures surface the backend's detail.

use stafftrack::{
    error::{FormError, REFRESH_FAILED},
    view::{
        employee::DELETE_CONFIRMATION, format::csv_data_uri, EmployeeForm, EmployeeRoster,
        HeadlessPrompt, ViewPhase,
    },
    Error,
};
use stafftrack_test_utils::prelude::*;

use crate::util::TestClient;

fn form(name: &str, email: &str) -> EmployeeForm {
    EmployeeForm {
        name: name.to_string(),
        email: email.to_string(),
        job_title: "Engineer".to_string(),
        salary: "50000".to_string(),
        join_date: "2024-01-01".to_string(),
        department_id: "1".to_string(),
    }
}

/// Tests the initial load.
///
/// Expected: Ok with the listed employees, phases Loading then Idle
#[tokio::test]
async fn loads_employees() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_bearer(TEST_TOKEN)
        .with_employees_endpoint(
            vec![
                employee_factory::employee(1, "Ada Lovelace", 1, "Engineering"),
                employee_factory::employee(2, "Grace Hopper", 2, "Research"),
            ],
            1,
        )
        .build()
        .await;
    let client = TestClient::signed_in(&test);
    let mut phases = Vec::new();

    let employees = EmployeeRoster::new(&client.gateway)
        .load(|phase| phases.push(phase))
        .await?;

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].department_name.as_deref(), Some("Engineering"));
    assert_eq!(phases, vec![ViewPhase::Loading, ViewPhase::Idle]);
    test.assert_mocks();

    Ok(())
}

/// Tests adding an employee.
///
/// Verifies that the typed salary and department are sent as numbers in exactly one
/// POST, followed by exactly one GET of the list whose result is returned.
///
/// Expected: Ok with the refreshed list, phases Saving, Refreshing, Idle
#[tokio::test]
async fn add_posts_once_then_refreshes_once() -> Result<(), Error> {
    let created = employee_factory::employee(3, "A", 1, "Engineering");
    let test = TestBuilder::new()
        .with_bearer(TEST_TOKEN)
        .with_create_employee_endpoint(
            employee_factory::payload("A", "a@b.com", 50000.0, 1),
            created.clone(),
            1,
        )
        .with_employees_endpoint(vec![created], 1)
        .build()
        .await;
    let client = TestClient::signed_in(&test);
    let mut phases = Vec::new();

    let employees = EmployeeRoster::new(&client.gateway)
        .add(&form("A", "a@b.com"), |phase| phases.push(phase))
        .await?;

    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].id, 3);
    assert_eq!(
        phases,
        vec![ViewPhase::Saving, ViewPhase::Refreshing, ViewPhase::Idle]
    );
    test.assert_mocks();

    Ok(())
}

/// Tests that a form failing coercion never reaches the backend.
///
/// Expected: Err(FormError::InvalidNumber), no requests
#[tokio::test]
async fn invalid_form_sends_nothing() {
    let test = TestBuilder::new()
        .with_create_employee_endpoint(
            employee_factory::payload("A", "a@b.com", 50000.0, 1),
            employee_factory::employee(3, "A", 1, "Engineering"),
            0,
        )
        .with_employees_endpoint(Vec::new(), 0)
        .build()
        .await;
    let client = TestClient::signed_in(&test);
    let form = EmployeeForm {
        salary: "fifty thousand".to_string(),
        ..form("A", "a@b.com")
    };

    let result = EmployeeRoster::new(&client.gateway)
        .add(&form, |_| {})
        .await;

    assert!(matches!(
        result,
        Err(Error::FormError(FormError::InvalidNumber { field: "salary", .. }))
    ));
    test.assert_mocks();
}

/// Tests a create the backend refuses.
///
/// Expected: Err with the backend detail, no list refresh
#[tokio::test]
async fn failed_add_skips_refresh() {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/employees")
                .with_status(400)
                .with_header("content-type", "application/json")
                .with_body(error_body("Email already registered").to_string())
                .expect(1)
                .create()
        })
        .with_employees_endpoint(Vec::new(), 0)
        .build()
        .await;
    let client = TestClient::signed_in(&test);

    let err = EmployeeRoster::new(&client.gateway)
        .add(&form("A", "a@b.com"), |_| {})
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message("Error adding employee."),
        "Email already registered"
    );
    test.assert_mocks();
}

/// Tests editing an employee.
///
/// Expected: Ok after one PUT to /api/employees/{id} and one list refresh
#[tokio::test]
async fn update_puts_then_refreshes() -> Result<(), Error> {
    let updated = employee_factory::employee(7, "Grace", 2, "Research");
    let test = TestBuilder::new()
        .with_bearer(TEST_TOKEN)
        .with_update_employee_endpoint(
            7,
            employee_factory::payload("Grace", "grace@acme.test", 50000.0, 1),
            updated.clone(),
            1,
        )
        .with_employees_endpoint(vec![updated], 1)
        .build()
        .await;
    let client = TestClient::signed_in(&test);

    let employees = EmployeeRoster::new(&client.gateway)
        .update(7, &form("Grace", "grace@acme.test"), |_| {})
        .await?;

    assert_eq!(employees[0].name, "Grace");
    test.assert_mocks();

    Ok(())
}

/// Tests declining the delete confirmation.
///
/// Expected: Ok(None), confirmation shown once, no requests
#[tokio::test]
async fn declined_delete_sends_nothing() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_delete_employee_endpoint(4, 0)
        .with_employees_endpoint(Vec::new(), 0)
        .build()
        .await;
    let client = TestClient::signed_in(&test);
    let prompt = HeadlessPrompt::answering(false);

    let result = EmployeeRoster::new(&client.gateway)
        .remove(4, &prompt, |_| {})
        .await?;

    assert!(result.is_none());
    assert_eq!(prompt.confirmations(), vec![DELETE_CONFIRMATION.to_string()]);
    test.assert_mocks();

    Ok(())
}

/// Tests confirming the delete.
///
/// Expected: Ok(Some(list)) after one DELETE and one list refresh
#[tokio::test]
async fn confirmed_delete_removes_and_refreshes() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_bearer(TEST_TOKEN)
        .with_delete_employee_endpoint(4, 1)
        .with_employees_endpoint(Vec::new(), 1)
        .build()
        .await;
    let client = TestClient::signed_in(&test);
    let prompt = HeadlessPrompt::answering(true);

    let result = EmployeeRoster::new(&client.gateway)
        .remove(4, &prompt, |_| {})
        .await?;

    assert_eq!(result, Some(Vec::new()));
    test.assert_mocks();

    Ok(())
}

/// Tests a delete that succeeds when the following list refresh fails.
///
/// Verifies that the failure is reported as a refresh problem rather than a failed delete.
///
/// Expected: Err(Error::RefreshError) after one DELETE and one failed list read
#[tokio::test]
async fn failed_refresh_after_delete_is_reported_separately() {
    let test = TestBuilder::new()
        .with_delete_employee_endpoint(4, 1)
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/employees")
                .with_status(500)
                .expect(1)
                .create()
        })
        .build()
        .await;
    let client = TestClient::signed_in(&test);
    let prompt = HeadlessPrompt::answering(true);

    let err = EmployeeRoster::new(&client.gateway)
        .remove(4, &prompt, |_| {})
        .await
        .unwrap_err();

    assert!(matches!(err, Error::RefreshError(_)));
    assert!(!err.is_unauthorized());
    assert_eq!(err.user_message("Error deleting employee."), REFRESH_FAILED);
    test.assert_mocks();
}

/// Tests the CSV export.
///
/// Expected: Ok with the CSV text, usable as a download link
#[tokio::test]
async fn exports_csv() -> Result<(), Error> {
    let csv = employee_factory::export_csv(&[(1, "Ada"), (2, "Grace")]);
    let test = TestBuilder::new()
        .with_bearer(TEST_TOKEN)
        .with_export_endpoint(csv.clone(), 1)
        .build()
        .await;
    let client = TestClient::signed_in(&test);

    let exported = EmployeeRoster::new(&client.gateway).export_csv().await?;

    assert_eq!(exported, csv);
    assert!(csv_data_uri(&exported).starts_with("data:text/csv;charset=utf-8,id%2Cname%0A"));
    test.assert_mocks();

    Ok(())
}
