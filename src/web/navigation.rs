use dioxus_logger::tracing;

use crate::gateway::Navigator;

/// Full page navigation via `window.location`.
#[derive(Clone, Copy, Default, Debug)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, location: &str) {
        let Some(window) = web_sys::window() else {
            tracing::error!("No window available to navigate to {}", location);
            return;
        };

        if let Err(e) = window.location().set_href(location) {
            tracing::error!("Failed to navigate to {}: {:?}", location, e);
        }
    }
}
