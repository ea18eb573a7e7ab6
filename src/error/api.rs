use serde_json::Value;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure of a single gateway request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection refused, CORS, offline).
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// The backend answered 401; the session has been cleared and the login page requested.
    #[error("Session rejected by the server: {detail}")]
    Unauthorized { detail: String },
    /// The backend answered with a 4xx other than 401.
    #[error("Request failed with status {status}: {detail}")]
    Rejected { status: u16, detail: String },
    /// The backend answered with a 5xx.
    #[error("Server error with status {status}")]
    Server { status: u16 },
    /// A response body did not match the expected shape.
    #[error("Failed to parse response body: {0}")]
    Decode(String),
    /// A request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Classify an error status and its body.
    ///
    /// Only meaningful for non-2xx statuses; the body is searched for a FastAPI style
    /// `{"detail": ...}` document and falls back to the raw text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);

        match status {
            401 => Self::Unauthorized { detail },
            500.. => Self::Server { status },
            _ => Self::Rejected { status, detail },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Rejected { status, .. } | Self::Server { status } => Some(*status),
            _ => None,
        }
    }

    /// Text to show the user: the backend detail when there is one, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Unauthorized { detail } | Self::Rejected { detail, .. } if !detail.is_empty() => {
                detail.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

fn extract_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorDto>(body) {
        Ok(ErrorDto { detail }) => detail_text(&detail),
        Err(_) => body.trim().to_string(),
    }
}

fn detail_text(detail: &Value) -> String {
    match detail {
        Value::String(message) => message.clone(),
        Value::Null => String::new(),
        // Request validation failures arrive as a list of `{loc, msg, type}` objects
        Value::Array(items) => items
            .iter()
            .map(|item| match item.get("msg").and_then(Value::as_str) {
                Some(msg) => msg.to_string(),
                None => item.to_string(),
            })
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}
