use dioxus::prelude::*;
use dioxus_logger::tracing;
use stafftrack::Config;

use crate::client::{context::AppContext, router::Route};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = Config::from_build_env().unwrap_or_else(|err| {
            tracing::error!("Invalid configuration, falling back to defaults: {}", err);
            Config::default()
        });

        tracing::info!("Using API at {}", config.api_base_url);

        AppContext::new(&config)
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
