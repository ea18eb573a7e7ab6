use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Aggregates returned by `GET /api/stats/summary`.
///
/// A company without employees reports zeroes everywhere and an empty breakdown.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct StatsSummaryDto {
    pub total_employees: u64,
    pub average_salary: f64,
    pub median_salary: f64,
    pub min_salary: f64,
    pub max_salary: f64,
    /// Headcount per department name.
    #[serde(default)]
    pub employees_by_dept: BTreeMap<String, u64>,
}

/// Rendered chart returned by the `/api/charts/*` endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChartDto {
    /// PNG image, either as a complete `data:` URI or as bare base64.
    pub image_base64: String,
}

impl ChartDto {
    /// Value usable directly as an `img` source.
    pub fn data_uri(&self) -> String {
        if self.image_base64.starts_with("data:") {
            self.image_base64.clone()
        } else {
            format!("{}{}", PNG_DATA_URI_PREFIX, self.image_base64)
        }
    }

    /// Decoded image bytes.
    pub fn png_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        let encoded = match self.image_base64.split_once(";base64,") {
            Some((_, payload)) => payload,
            None => self.image_base64.as_str(),
        };

        STANDARD.decode(encoded.trim())
    }
}
