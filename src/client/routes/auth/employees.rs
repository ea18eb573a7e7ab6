use dioxus::prelude::*;
use stafftrack::{
    model::employee::EmployeeDto,
    view::{format::csv_data_uri, EmployeeRoster, Prompt, ViewPhase},
    Error,
};

use crate::client::{
    components::{EmployeeModal, EmployeeTable, Page},
    context::AppContext,
};

const LOAD_FAILED: &str = "Failed to load employees. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
enum ModalState {
    Closed,
    Add,
    Edit(EmployeeDto),
}

#[component]
pub fn Employees() -> Element {
    let ctx = use_context::<AppContext>();

    let mut employees = use_signal(Vec::<EmployeeDto>::new);
    let mut phase = use_signal(ViewPhase::default);
    let mut error = use_signal(|| None::<String>);
    let mut modal = use_signal(|| ModalState::Closed);
    let mut export_href = use_signal(|| None::<String>);

    let gateway = ctx.gateway.clone();
    use_hook(move || {
        spawn(async move {
            match EmployeeRoster::new(&gateway)
                .load(move |p| phase.set(p))
                .await
            {
                Ok(list) => employees.set(list),
                Err(_) => error.set(Some(LOAD_FAILED.to_string())),
            }
        })
    });

    let delete_ctx = ctx.clone();
    let on_delete = move |id: i64| {
        let gateway = delete_ctx.gateway.clone();
        let prompt = delete_ctx.prompt;

        spawn(async move {
            match EmployeeRoster::new(&gateway)
                .remove(id, &prompt, move |p| phase.set(p))
                .await
            {
                Ok(Some(list)) => {
                    prompt.alert("Employee deleted successfully!");
                    employees.set(list);
                }
                Ok(None) => {}
                Err(err) if err.is_unauthorized() => {}
                Err(err @ Error::RefreshError(_)) => {
                    prompt.alert(&err.user_message("Error deleting employee."));
                    if let Ok(list) = EmployeeRoster::new(&gateway).load(|_| {}).await {
                        employees.set(list);
                    }
                }
                Err(err) => prompt.alert(&err.user_message("Error deleting employee.")),
            }
        });
    };

    let on_export = move |_: MouseEvent| {
        let gateway = ctx.gateway.clone();
        let prompt = ctx.prompt;

        spawn(async move {
            match EmployeeRoster::new(&gateway).export_csv().await {
                Ok(csv) => export_href.set(Some(csv_data_uri(&csv))),
                Err(err) if err.is_unauthorized() => {}
                Err(err) => prompt.alert(&err.user_message("Could not export employees.")),
            }
        });
    };

    let editing = match modal() {
        ModalState::Closed => None,
        ModalState::Add => Some(None),
        ModalState::Edit(employee) => Some(Some(employee)),
    };

    rsx!(
        document::Title { "Employees | StaffTrack" }
        Page { title: "Employees", subtitle: "Manage your team",
            div { class: "toolbar",
                button {
                    class: "btn-primary",
                    onclick: move |_| modal.set(ModalState::Add),
                    "Add Employee"
                }
                button {
                    class: "btn-cancel",
                    onclick: on_export,
                    "Export CSV"
                }
                if let Some(href) = export_href() {
                    a {
                        class: "btn-link",
                        href: "{href}",
                        download: "employees.csv",
                        onclick: move |_| export_href.set(None),
                        "Download employees.csv"
                    }
                }
                match phase() {
                    ViewPhase::Saving => rsx!(span { class: "status", "Saving..." }),
                    ViewPhase::Refreshing => rsx!(span { class: "status", "Refreshing..." }),
                    _ => rsx!(),
                }
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            } else if phase() == ViewPhase::Loading {
                p { class: "loading", "Loading employees..." }
            } else {
                EmployeeTable {
                    employees: employees(),
                    on_edit: move |employee| modal.set(ModalState::Edit(employee)),
                    on_delete,
                }
            }
        }
        if let Some(editing) = editing {
            EmployeeModal {
                editing,
                on_saved: move |list| employees.set(list),
                on_close: move |_| modal.set(ModalState::Closed),
            }
        }
    )
}
