use dioxus::prelude::*;
use dioxus_logger::tracing;
use stafftrack::{
    model::employee::EmployeeDto,
    service::DepartmentService,
    view::{EmployeeForm, EmployeeRoster, Prompt, ViewPhase},
    Error,
};

use crate::client::context::AppContext;

/// Add/edit employee dialog. Mounted only while open, so the department options are
/// fetched each time it opens.
///
/// `editing` selects between creating a new employee and replacing an existing one. On
/// success the refreshed roster is handed to `on_saved` and the dialog asks to close.
#[component]
pub fn EmployeeModal(
    #[props(!optional)]
    editing: Option<EmployeeDto>,
    on_saved: EventHandler<Vec<EmployeeDto>>,
    on_close: EventHandler,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut phase = use_signal(ViewPhase::default);
    let mut form = use_signal(|| {
        editing
            .as_ref()
            .map(EmployeeForm::from_employee)
            .unwrap_or_default()
    });

    let gateway = ctx.gateway.clone();
    let departments = use_resource(move || {
        let gateway = gateway.clone();
        async move { DepartmentService::new(&gateway).list().await }
    });

    let department_options = match &*departments.read() {
        Some(Ok(departments)) => departments.clone(),
        Some(Err(err)) => {
            tracing::error!("Failed to load departments: {}", err);
            Vec::new()
        }
        None => Vec::new(),
    };

    let title = if editing.is_some() {
        "Edit Employee"
    } else {
        "Add Employee"
    };
    let submit_label = match phase() {
        ViewPhase::Saving => "Saving...",
        ViewPhase::Refreshing => "Refreshing...",
        _ => "Save",
    };

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let gateway = ctx.gateway.clone();
        let prompt = ctx.prompt;
        let editing = editing.clone();
        let current = form();

        spawn(async move {
            let roster = EmployeeRoster::new(&gateway);
            let (result, fallback) = match &editing {
                Some(employee) => (
                    roster
                        .update(employee.id, &current, move |p| phase.set(p))
                        .await,
                    "Error updating employee",
                ),
                None => (
                    roster.add(&current, move |p| phase.set(p)).await,
                    "Error adding employee.",
                ),
            };

            match result {
                Ok(employees) => {
                    on_saved.call(employees);
                    on_close.call(());
                }
                // The gateway has already sent the browser to the login page
                Err(err) if err.is_unauthorized() => {}
                // Saved already, so resubmitting would duplicate the change
                Err(err @ Error::RefreshError(_)) => {
                    prompt.alert(&err.user_message(fallback));
                    on_close.call(());
                }
                Err(err) => prompt.alert(&err.user_message(fallback)),
            }
        });
    };

    rsx!(
        div { class: "modal-backdrop",
            div { class: "modal",
                h2 { class: "modal-title", "{title}" }
                form { class: "modal-form", onsubmit,
                    input {
                        class: "input-field",
                        placeholder: "Full Name",
                        required: true,
                        value: "{form.read().name}",
                        oninput: move |e| form.write().name = e.value(),
                    }
                    input {
                        class: "input-field",
                        r#type: "email",
                        placeholder: "Email",
                        required: true,
                        value: "{form.read().email}",
                        oninput: move |e| form.write().email = e.value(),
                    }
                    input {
                        class: "input-field",
                        placeholder: "Job Title",
                        required: true,
                        value: "{form.read().job_title}",
                        oninput: move |e| form.write().job_title = e.value(),
                    }
                    input {
                        class: "input-field",
                        r#type: "number",
                        placeholder: "Salary",
                        required: true,
                        value: "{form.read().salary}",
                        oninput: move |e| form.write().salary = e.value(),
                    }
                    input {
                        class: "input-field",
                        r#type: "date",
                        required: true,
                        value: "{form.read().join_date}",
                        oninput: move |e| form.write().join_date = e.value(),
                    }
                    select {
                        class: "input-field",
                        required: true,
                        value: "{form.read().department_id}",
                        onchange: move |e| form.write().department_id = e.value(),
                        option { value: "", "Select Department" }
                        for department in department_options {
                            option {
                                key: "{department.id}",
                                value: "{department.id}",
                                "{department.name}"
                            }
                        }
                    }
                    div { class: "modal-actions",
                        button {
                            class: "btn-cancel",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            class: "btn-primary",
                            r#type: "submit",
                            disabled: phase().is_busy(),
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    )
}
