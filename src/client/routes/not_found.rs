use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        document::Title { "Not Found | StaffTrack" }
        div { class: "auth-screen",
            div { class: "auth-card",
                h1 { class: "auth-title", "Page not found" }
                p { class: "auth-subtitle", "Nothing lives at /{path}." }
                Link { to: Route::login(), class: "btn-primary", "Back to login" }
            }
        }
    )
}
