use dioxus_logger::tracing;

use crate::{
    error::Error,
    gateway::{ApiGateway, Transport},
    model::auth::{RegisterDto, TokenDto, UserProfileDto},
    session::Session,
};

/// Registration, login and logout.
pub struct AuthService<'a, T> {
    gateway: &'a ApiGateway<T>,
}

impl<'a, T: Transport> AuthService<'a, T> {
    pub fn new(gateway: &'a ApiGateway<T>) -> Self {
        Self { gateway }
    }

    /// Create an account.
    ///
    /// Does not log the user in; the caller authenticates separately, passing the returned
    /// `company_name` along so the session can show it.
    ///
    /// # Returns
    /// - `Ok(UserProfileDto)` - The created account
    /// - `Err(Error::ApiError)` - Rejected (e.g. username or email taken) or unreachable backend
    pub async fn register(&self, registration: &RegisterDto) -> Result<UserProfileDto, Error> {
        let profile: UserProfileDto = self
            .gateway
            .post_json("/auth/register", registration)
            .await?;

        tracing::info!(
            username = %profile.username,
            company = %profile.company_name,
            "Registered account"
        );

        Ok(profile)
    }

    /// Log in with username and password.
    ///
    /// Credentials are sent form-encoded. On success the returned token is persisted
    /// together with the username and company, replacing any previous session. The login
    /// response carries no company, so `company_name` comes from the caller (the profile
    /// returned by [`register`](Self::register)); without one, the company of a previous
    /// session for the same username is kept. On failure nothing is written and the
    /// backend's detail is carried in the error.
    ///
    /// # Returns
    /// - `Ok(String)` - The access token now stored in the session
    /// - `Err(Error::ApiError)` - Credentials rejected or backend unreachable
    /// - `Err(Error::StorageError)` - Token could not be persisted
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
        company_name: Option<&str>,
    ) -> Result<String, Error> {
        let token: TokenDto = self
            .gateway
            .post_form("/auth/login", &[("username", username), ("password", password)])
            .await?;

        let session = self.gateway.session();
        let company_name = match company_name.filter(|company| !company.is_empty()) {
            Some(company) => company.to_string(),
            None => session
                .current()
                .filter(|previous| previous.username == username)
                .map(|previous| previous.company_name)
                .unwrap_or_default(),
        };

        session.save(&Session {
            token: token.access_token.clone(),
            username: username.to_string(),
            company_name,
        })?;

        tracing::info!(username = %username, "Logged in");

        Ok(token.access_token)
    }

    /// Forget the session. Safe to call when already logged out.
    pub fn logout(&self) {
        self.gateway.session().clear();
    }
}
