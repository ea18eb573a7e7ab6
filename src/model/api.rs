use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The body returned when the backend rejects a request
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    /// Either a message string or, for request validation failures, a list of issues
    #[serde(default)]
    pub detail: Value,
}
