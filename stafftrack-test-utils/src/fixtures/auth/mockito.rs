//! Mock endpoints for the token and registration routes.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::fixtures::{auth::AuthFixtures, error_body, json_response};

impl<'a> AuthFixtures<'a> {
    /// Create a `POST /auth/login` endpoint accepting only the given credentials as an
    /// urlencoded form, answering with a bearer token.
    ///
    /// # Arguments
    /// - `username` - Expected `username` form field
    /// - `password` - Expected `password` form field
    /// - `access_token` - Token to issue
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_login_endpoint(
        &mut self,
        username: &str,
        password: &str,
        access_token: &str,
        expected_requests: usize,
    ) -> Mock {
        let mock = self
            .setup
            .server
            .mock("POST", "/auth/login")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("username".into(), username.into()),
                Matcher::UrlEncoded("password".into(), password.into()),
            ]));

        json_response(mock, 200, &super::factory::token(access_token))
            .expect(expected_requests)
            .create()
    }

    /// Create a `POST /auth/login` endpoint rejecting every attempt with 401.
    pub fn create_login_rejected_endpoint(&mut self, expected_requests: usize) -> Mock {
        let mock = self.setup.server.mock("POST", "/auth/login");

        json_response(mock, 401, &error_body("Incorrect username or password"))
            .expect(expected_requests)
            .create()
    }

    /// Create a `POST /auth/register` endpoint expecting `registration` as its JSON body.
    ///
    /// # Arguments
    /// - `registration` - Exact JSON body the endpoint matches
    /// - `status` - Status to answer with
    /// - `response` - Body to answer with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_register_endpoint(
        &mut self,
        registration: Value,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Mock {
        let mock = self
            .setup
            .server
            .mock("POST", "/auth/register")
            .match_body(Matcher::Json(registration));

        json_response(mock, status, &response)
            .expect(expected_requests)
            .create()
    }
}
