use serde_json::{json, Map, Value};

/// Base64 of the 8 byte PNG signature, enough to pass image validation.
pub static PNG_BASE64: &str = "iVBORw0KGgo=";

pub fn summary(total_employees: u64, salaries: &[f64], by_department: &[(&str, u64)]) -> Value {
    let mut sorted = salaries.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let (average, median, min, max) = match sorted.len() {
        0 => (0.0, 0.0, 0.0, 0.0),
        n => {
            let median = if n % 2 == 0 {
                (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
            } else {
                sorted[n / 2]
            };
            (
                sorted.iter().sum::<f64>() / n as f64,
                median,
                sorted[0],
                sorted[n - 1],
            )
        }
    };

    let by_department: Map<String, Value> = by_department
        .iter()
        .map(|(name, count)| (name.to_string(), json!(count)))
        .collect();

    json!({
        "total_employees": total_employees,
        "average_salary": average,
        "median_salary": median,
        "min_salary": min,
        "max_salary": max,
        "employees_by_dept": by_department,
    })
}

/// Chart body as the backend sends it, a complete `data:` URI.
pub fn chart() -> Value {
    json!({ "image_base64": format!("data:image/png;base64,{}", PNG_BASE64) })
}
