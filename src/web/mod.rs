//! Browser implementations of the client's platform seams: `localStorage` for the
//! session, `window.location` for full navigations, `window.confirm`/`alert` for prompts,
//! and `reqwasm` for HTTP.

pub mod navigation;
pub mod prompt;
pub mod storage;
pub mod transport;

pub use navigation::BrowserNavigator;
pub use prompt::BrowserPrompt;
pub use storage::LocalStorage;
pub use transport::ReqwasmTransport;

use crate::{config::Config, gateway::ApiGateway, session::SessionStore};

pub type WebGateway = ApiGateway<ReqwasmTransport>;

/// Gateway wired to the browser: session in `localStorage`, redirects through
/// `window.location`.
pub fn web_gateway(config: &Config) -> WebGateway {
    ApiGateway::new(
        config,
        ReqwasmTransport,
        SessionStore::new(LocalStorage),
        BrowserNavigator,
    )
}
