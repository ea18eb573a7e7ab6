//! Tests for AuthService.
//!
//! This module verifies the login flow (form-encoded credentials, session persistence,
//! failure handling), registration without an implicit login, and logout.

use stafftrack::{model::auth::RegisterDto, service::AuthService, Error};
use stafftrack_test_utils::prelude::*;

use crate::util::TestClient;

fn registration() -> RegisterDto {
    RegisterDto {
        username: TEST_USERNAME.to_string(),
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
        company_name: TEST_COMPANY.to_string(),
    }
}

/// Tests a successful login.
///
/// Verifies that credentials are posted as an urlencoded form and that the issued token
/// and username are persisted.
///
/// Expected: Ok with the token, session active for the test user
#[tokio::test]
async fn authenticates_and_saves_session() -> Result<(), Error> {
    let test = TestBuilder::new().with_login_endpoint(1).build().await;
    let client = TestClient::new(&test);

    let token = AuthService::new(&client.gateway)
        .authenticate(TEST_USERNAME, TEST_PASSWORD, None)
        .await?;

    assert_eq!(token, TEST_TOKEN);
    let session = client.gateway.session().current().unwrap();
    assert_eq!(session.token, TEST_TOKEN);
    assert_eq!(session.username, TEST_USERNAME);
    assert!(session.company_name.is_empty());
    assert!(client.navigator.visited().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests logging in again as the same user.
///
/// Expected: Ok, company name from the previous session retained
#[tokio::test]
async fn keeps_company_for_same_user() -> Result<(), Error> {
    let test = TestBuilder::new().with_login_endpoint(1).build().await;
    let client = TestClient::signed_in(&test);

    AuthService::new(&client.gateway)
        .authenticate(TEST_USERNAME, TEST_PASSWORD, None)
        .await?;

    let session = client.gateway.session().current().unwrap();
    assert_eq!(session.company_name, TEST_COMPANY);
    test.assert_mocks();

    Ok(())
}

/// Tests signing up and then logging in on a fresh client.
///
/// Verifies that the company from the created profile ends up in the session, and that a
/// later login of the same user without a company keeps it.
///
/// Expected: Ok, stored company equals the registered company after both logins
#[tokio::test]
async fn login_after_signup_stores_registered_company() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_register_endpoint(1)
        .with_login_endpoint(2)
        .build()
        .await;
    let client = TestClient::new(&test);
    let auth = AuthService::new(&client.gateway);

    let profile = auth.register(&registration()).await?;
    auth.authenticate(TEST_USERNAME, TEST_PASSWORD, Some(&profile.company_name))
        .await?;

    let session = client.gateway.session().current().unwrap();
    assert_eq!(session.company_name, TEST_COMPANY);

    auth.authenticate(TEST_USERNAME, TEST_PASSWORD, None).await?;

    let session = client.gateway.session().current().unwrap();
    assert_eq!(session.company_name, TEST_COMPANY);
    test.assert_mocks();

    Ok(())
}

/// Tests rejected credentials.
///
/// Verifies that the backend detail is surfaced and no session is created. The 401 goes
/// through the gateway's unauthorized handling like any other request.
///
/// Expected: Err with "Incorrect username or password", session inactive
#[tokio::test]
async fn rejected_login_leaves_session_inactive() {
    let test = TestBuilder::new().with_login_rejected_endpoint(1).build().await;
    let client = TestClient::new(&test);

    let result = AuthService::new(&client.gateway)
        .authenticate(TEST_USERNAME, "wrong", None)
        .await;

    let err = result.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(
        err.user_message("Invalid username or password"),
        "Incorrect username or password"
    );
    assert!(!client.gateway.session().is_active());
    assert_eq!(client.navigator.visited(), vec!["/login".to_string()]);
    test.assert_mocks();
}

/// Tests registration.
///
/// Expected: Ok with the created profile, no session created
#[tokio::test]
async fn register_does_not_log_in() -> Result<(), Error> {
    let test = TestBuilder::new().with_register_endpoint(1).build().await;
    let client = TestClient::new(&test);

    let profile = AuthService::new(&client.gateway)
        .register(&registration())
        .await?;

    assert_eq!(profile.username, TEST_USERNAME);
    assert_eq!(profile.company_name, TEST_COMPANY);
    assert!(!client.gateway.session().is_active());
    assert!(client.storage.is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests a registration the backend refuses.
///
/// Expected: Err carrying the backend detail
#[tokio::test]
async fn register_surfaces_backend_detail() {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/auth/register")
                .with_status(400)
                .with_header("content-type", "application/json")
                .with_body(error_body("Username already registered").to_string())
                .expect(1)
                .create()
        })
        .build()
        .await;
    let client = TestClient::new(&test);

    let err = AuthService::new(&client.gateway)
        .register(&registration())
        .await
        .unwrap_err();

    assert_eq!(err.user_message("Signup failed."), "Username already registered");
    assert!(client.navigator.visited().is_empty());
    test.assert_mocks();
}

/// Tests logout.
///
/// Expected: every session key removed, no request sent
#[tokio::test]
async fn logout_clears_session() {
    let test = TestBuilder::new().build().await;
    let client = TestClient::signed_in(&test);

    AuthService::new(&client.gateway).logout();

    assert!(!client.gateway.session().is_active());
    assert!(client.gateway.session().current().is_none());
    assert!(client.storage.is_empty());
}
