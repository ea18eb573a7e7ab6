use dioxus::prelude::*;
use stafftrack::service::AuthService;

use crate::client::{context::AppContext, router::Route};

/// Login form. `username` and `company` are filled in when arriving from signup; the
/// company is stored with the session if the same username logs in.
#[component]
pub fn Login(username: String, company: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut username_input = use_signal(|| username.clone());
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let gateway = ctx.gateway.clone();
        let (entered, password) = (username_input(), password());
        let company_name = (entered == username).then(|| company.clone());
        error.set(None);
        submitting.set(true);

        spawn(async move {
            let result = AuthService::new(&gateway)
                .authenticate(&entered, &password, company_name.as_deref())
                .await;
            submitting.set(false);

            match result {
                Ok(_) => {
                    navigator.push(Route::Dashboard {});
                }
                Err(err) => error.set(Some(err.user_message("Invalid username or password"))),
            }
        });
    };

    rsx!(
        document::Title { "Login | StaffTrack" }
        div { class: "auth-screen",
            div { class: "auth-card",
                h1 { class: "auth-title", "StaffTrack" }
                p { class: "auth-subtitle", "Sign in to manage your workforce" }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                form { class: "auth-form", onsubmit,
                    input {
                        class: "input-field",
                        placeholder: "Username",
                        required: true,
                        value: "{username_input}",
                        oninput: move |e| username_input.set(e.value()),
                    }
                    input {
                        class: "input-field",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    button {
                        class: "btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Login" }
                    }
                }
                p { class: "auth-footer",
                    "Don't have an account? "
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }
    )
}
