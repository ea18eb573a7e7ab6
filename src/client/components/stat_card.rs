use dioxus::prelude::*;

#[component]
pub fn StatCard(title: &'static str, value: String) -> Element {
    rsx!(
        div { class: "stat-card",
            p { class: "stat-title", "{title}" }
            p { class: "stat-value", "{value}" }
        }
    )
}
