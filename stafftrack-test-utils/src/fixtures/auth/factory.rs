use serde_json::{json, Value};

use crate::constant::{TEST_COMPANY, TEST_EMAIL, TEST_PASSWORD, TEST_USERNAME};

/// Body of a successful `POST /auth/login`.
pub fn token(access_token: &str) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "bearer",
    })
}

/// Registration request for the standard test user.
pub fn registration() -> Value {
    json!({
        "username": TEST_USERNAME,
        "email": TEST_EMAIL,
        "password": TEST_PASSWORD,
        "company_name": TEST_COMPANY,
    })
}

/// Body of a successful `POST /auth/register` for the standard test user.
pub fn user_profile(id: i64) -> Value {
    json!({
        "id": id,
        "username": TEST_USERNAME,
        "email": TEST_EMAIL,
        "company_id": 1,
        "company_name": TEST_COMPANY,
    })
}
