use serde_json::{json, Value};

/// Employee as returned by the backend, with the department name resolved.
pub fn employee(id: i64, name: &str, department_id: i64, department_name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@acme.test", name.to_lowercase().replace(' ', ".")),
        "job_title": "Engineer",
        "salary": 50000.0,
        "join_date": "2024-01-01",
        "department_id": department_id,
        "department_name": department_name,
    })
}

/// Request body for creating or replacing an employee.
pub fn payload(name: &str, email: &str, salary: f64, department_id: i64) -> Value {
    json!({
        "name": name,
        "email": email,
        "job_title": "Engineer",
        "salary": salary,
        "join_date": "2024-01-01",
        "department_id": department_id,
    })
}

/// CSV export for the given rows of `id,name` pairs.
pub fn export_csv(rows: &[(i64, &str)]) -> String {
    let mut csv = String::from("id,name\n");
    for (id, name) in rows {
        csv.push_str(&format!("{},{}\n", id, name));
    }
    csv
}
