#![allow(non_snake_case)]

#[cfg(feature = "web")]
mod client;

use dioxus_logger::tracing::{self, Level};

#[cfg(feature = "web")]
fn main() {
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    tracing::info!("Starting StaffTrack");

    dioxus::launch(client::App);
}

#[cfg(not(feature = "web"))]
fn main() {
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    match stafftrack::Config::from_env() {
        Ok(config) => tracing::info!(
            "StaffTrack is a browser client; build with the `web` feature. Backend configured at {}",
            config.api_base_url
        ),
        Err(err) => tracing::error!("{}", err),
    }
}
