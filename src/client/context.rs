use stafftrack::{
    web::{web_gateway, BrowserPrompt, WebGateway},
    Config,
};

/// Shared handles provided at the root of the component tree.
#[derive(Clone)]
pub struct AppContext {
    pub gateway: WebGateway,
    pub prompt: BrowserPrompt,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        Self {
            gateway: web_gateway(config),
            prompt: BrowserPrompt,
        }
    }
}
