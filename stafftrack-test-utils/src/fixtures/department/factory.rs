use serde_json::{json, Value};

use crate::constant::TEST_COMPANY;

pub fn department(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "company_name": TEST_COMPANY,
    })
}
