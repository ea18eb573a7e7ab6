//! Credentials and identities shared by all tests. None of these are real.

/// Access token issued by the mock login endpoint.
pub static TEST_TOKEN: &str = "test-access-token";

pub static TEST_USERNAME: &str = "alice";

pub static TEST_PASSWORD: &str = "correct horse";

pub static TEST_EMAIL: &str = "alice@acme.test";

pub static TEST_COMPANY: &str = "Acme";
