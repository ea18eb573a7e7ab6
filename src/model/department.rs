use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DepartmentDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub company_name: String,
}

/// Body of `POST /api/departments`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DepartmentPayload {
    pub name: String,
}
