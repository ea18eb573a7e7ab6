//! API gateway.
//!
//! One configured client for every backend call. Each outbound request carries
//! `Authorization: Bearer <token>` while a session token exists. Each 401 response clears
//! the session and performs exactly one full navigation to the login entry point before
//! the failure is handed back to the caller. There is no retry and no replay; every other
//! response passes through untouched.

pub mod navigation;
pub mod request;
pub mod transport;

use std::rc::Rc;

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

pub use navigation::{HeadlessNavigator, Navigator};
pub use request::{ApiRequest, ApiResponse, Method};
#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;
pub use transport::Transport;

use crate::{config::Config, error::ApiError, session::SessionStore};

#[derive(Clone)]
pub struct ApiGateway<T> {
    base_url: String,
    login_path: String,
    transport: T,
    session: SessionStore,
    navigator: Rc<dyn Navigator>,
}

impl<T: Transport> ApiGateway<T> {
    pub fn new(
        config: &Config,
        transport: T,
        session: SessionStore,
        navigator: impl Navigator + 'static,
    ) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            login_path: config.login_path.clone(),
            transport,
            session,
            navigator: Rc::new(navigator),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Send a request through the interceptors.
    ///
    /// # Returns
    /// - `Ok(ApiResponse)` - Any response other than 401, whatever its status
    /// - `Err(ApiError::Unauthorized)` - 401; session cleared and login navigation issued
    /// - `Err(ApiError::Transport)` - No response was received
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = match self.session.token() {
            Some(token) => request.header(request::AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        };

        let method = request.method;
        let url = format!("{}{}", self.base_url, request.path);
        tracing::debug!("{} {}", method.as_str(), url);

        let response = self
            .transport
            .send(url.clone(), request)
            .await
            .inspect_err(|err| tracing::error!("{} {} failed: {}", method.as_str(), url, err))?;

        if response.status == 401 {
            tracing::warn!(
                "{} {} answered 401, clearing session and redirecting to {}",
                method.as_str(),
                url,
                self.login_path
            );

            self.session.clear();
            self.navigator.redirect(&self.login_path);

            return Err(ApiError::from_status(response.status, &response.body));
        }

        Ok(response)
    }

    /// Send a request and turn any non-2xx status into an error.
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.send(request).await?.error_for_status()
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute(ApiRequest::get(path)).await?.json()
    }

    pub async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        Ok(self.execute(ApiRequest::get(path)).await?.body)
    }

    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(ApiRequest::post(path).json(body)?)
            .await?
            .json()
    }

    pub async fn post_form<R: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<R, ApiError> {
        self.execute(ApiRequest::post(path).form(fields))
            .await?
            .json()
    }

    pub async fn put_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.execute(ApiRequest::put(path).json(body)?)
            .await?
            .json()
    }

    /// Issue a DELETE, ignoring whatever body the backend sends back.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(ApiRequest::delete(path)).await?;
        Ok(())
    }
}
