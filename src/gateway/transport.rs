use std::future::Future;

use crate::{
    error::ApiError,
    gateway::request::{ApiRequest, ApiResponse},
};

/// Sends a fully resolved request and reads the whole response.
///
/// Implementations only move bytes: any status is returned as `Ok`, and `Err` means no
/// response was obtained. Status handling belongs to the gateway.
pub trait Transport {
    fn send(
        &self,
        url: String,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Transport for native targets, backed by `reqwest`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Transport for ReqwestTransport {
    async fn send(&self, url: String, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use crate::gateway::request::Method;

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to read response body: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}
