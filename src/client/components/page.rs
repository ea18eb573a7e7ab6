use dioxus::prelude::*;

/// Content area of a protected view with its heading.
#[component]
pub fn Page(
    title: &'static str,
    subtitle: Option<&'static str>,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "page {class}",
            header { class: "page-header",
                h1 { class: "page-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            {children}
        }
    )
}
