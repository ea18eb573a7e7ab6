use dioxus::prelude::*;
use stafftrack::{
    model::auth::RegisterDto,
    service::AuthService,
    view::Prompt,
};

use crate::client::{context::AppContext, router::Route};

#[component]
pub fn Signup() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut company_name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let gateway = ctx.gateway.clone();
        let prompt = ctx.prompt;
        let registration = RegisterDto {
            username: username(),
            email: email(),
            password: password(),
            company_name: company_name(),
        };
        error.set(None);
        submitting.set(true);

        spawn(async move {
            let result = AuthService::new(&gateway).register(&registration).await;
            submitting.set(false);

            match result {
                Ok(profile) => {
                    prompt.alert("Account created successfully! Please login.");
                    navigator.push(Route::Login {
                        username: profile.username,
                        company: profile.company_name,
                    });
                }
                Err(err) => error.set(Some(err.user_message("Signup failed."))),
            }
        });
    };

    rsx!(
        document::Title { "Sign Up | StaffTrack" }
        div { class: "auth-screen",
            div { class: "auth-card",
                h1 { class: "auth-title", "Create Account" }
                p { class: "auth-subtitle", "Register your company on StaffTrack" }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                form { class: "auth-form", onsubmit,
                    input {
                        class: "input-field",
                        placeholder: "Username",
                        required: true,
                        value: "{username}",
                        oninput: move |e| username.set(e.value()),
                    }
                    input {
                        class: "input-field",
                        r#type: "email",
                        placeholder: "Email",
                        required: true,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    input {
                        class: "input-field",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    input {
                        class: "input-field",
                        placeholder: "Company Name",
                        required: true,
                        value: "{company_name}",
                        oninput: move |e| company_name.set(e.value()),
                    }
                    button {
                        class: "btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Creating account..." } else { "Sign Up" }
                    }
                }
                p { class: "auth-footer",
                    "Already have an account? "
                    Link { to: Route::login(), "Login" }
                }
            }
        }
    )
}
