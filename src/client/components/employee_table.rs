use dioxus::prelude::*;
use stafftrack::{model::employee::EmployeeDto, view::format::format_currency};

#[component]
pub fn EmployeeTable(
    employees: Vec<EmployeeDto>,
    on_edit: EventHandler<EmployeeDto>,
    on_delete: EventHandler<i64>,
) -> Element {
    if employees.is_empty() {
        return rsx!(
            p { class: "empty-state", "No employees yet." }
        );
    }

    rsx!(
        div { class: "table-card",
            table { class: "table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Job Title" }
                        th { "Department" }
                        th { "Salary" }
                        th { "Join Date" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for employee in employees {
                        EmployeeRow {
                            key: "{employee.id}",
                            employee: employee.clone(),
                            on_edit,
                            on_delete,
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn EmployeeRow(
    employee: EmployeeDto,
    on_edit: EventHandler<EmployeeDto>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = employee.id;
    let department = employee
        .department_name
        .clone()
        .unwrap_or_else(|| format!("#{}", employee.department_id));
    let salary = format_currency(employee.salary);
    let edited = employee.clone();

    rsx!(
        tr {
            td {
                p { class: "font-semibold", "{employee.name}" }
                p { class: "text-xs", "{employee.email}" }
            }
            td { "{employee.job_title}" }
            td { "{department}" }
            td { "{salary}" }
            td { "{employee.join_date}" }
            td { class: "actions",
                button {
                    class: "btn-link",
                    onclick: move |_| on_edit.call(edited.clone()),
                    "Edit"
                }
                button {
                    class: "btn-link btn-danger",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    )
}
