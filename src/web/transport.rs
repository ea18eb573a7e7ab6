use reqwasm::http::Request;

use crate::{
    error::ApiError,
    gateway::{ApiRequest, ApiResponse, Method, Transport},
};

/// `fetch` based transport for the browser.
#[derive(Clone, Copy, Default, Debug)]
pub struct ReqwasmTransport;

impl Transport for ReqwasmTransport {
    async fn send(&self, url: String, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to read response body: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}
