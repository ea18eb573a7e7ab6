use serde::{Deserialize, Serialize};

/// Account registration request for `POST /auth/register`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Company the account administers; created by the backend when it doesn't exist yet.
    pub company_name: String,
}

/// Profile of a newly registered account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfileDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub company_id: Option<i64>,
    pub company_name: String,
}

/// Response of `POST /auth/login`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
}
