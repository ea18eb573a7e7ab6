use dioxus_logger::tracing;

use crate::view::Prompt;

/// `window.confirm` and `window.alert`.
#[derive(Clone, Copy, Default, Debug)]
pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            tracing::warn!("Could not show alert: {}", message);
        }
    }
}
