use dioxus::prelude::*;
use stafftrack::{
    model::department::DepartmentDto,
    view::{DepartmentForm, DepartmentRoster, Prompt, ViewPhase},
    Error,
};

use crate::client::{components::Page, context::AppContext};

#[component]
pub fn Departments() -> Element {
    let ctx = use_context::<AppContext>();

    let mut departments = use_signal(Vec::<DepartmentDto>::new);
    let mut phase = use_signal(ViewPhase::default);
    let mut error = use_signal(|| None::<String>);
    let mut name = use_signal(String::new);

    let gateway = ctx.gateway.clone();
    use_hook(move || {
        spawn(async move {
            match DepartmentRoster::new(&gateway)
                .load(move |p| phase.set(p))
                .await
            {
                Ok(list) => departments.set(list),
                Err(_) => error.set(Some("Failed to load departments.".to_string())),
            }
        })
    });

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let gateway = ctx.gateway.clone();
        let prompt = ctx.prompt;
        let form = DepartmentForm { name: name() };

        spawn(async move {
            match DepartmentRoster::new(&gateway)
                .add(&form, move |p| phase.set(p))
                .await
            {
                Ok(list) => {
                    departments.set(list);
                    name.set(String::new());
                }
                Err(err) if err.is_unauthorized() => {}
                Err(err @ Error::RefreshError(_)) => {
                    name.set(String::new());
                    prompt.alert(&err.user_message("Could not add department."));
                }
                Err(err) => prompt.alert(&err.user_message("Could not add department.")),
            }
        });
    };

    rsx!(
        document::Title { "Departments | StaffTrack" }
        Page { title: "Departments", subtitle: "Organise your company structure",
            form { class: "inline-form", onsubmit,
                input {
                    class: "input-field",
                    placeholder: "New department name",
                    required: true,
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                button {
                    class: "btn-primary",
                    r#type: "submit",
                    disabled: phase().is_busy(),
                    "Add Department"
                }
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            } else if phase() == ViewPhase::Loading {
                p { class: "loading", "Loading departments..." }
            } else if departments.read().is_empty() {
                p { class: "empty-state", "No departments yet." }
            } else {
                div { class: "table-card",
                    table { class: "table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Name" }
                            }
                        }
                        tbody {
                            for department in departments() {
                                tr { key: "{department.id}",
                                    td { "{department.id}" }
                                    td { "{department.name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
