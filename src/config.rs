use crate::error::config::ConfigError;

/// Environment variable holding the backend base address.
pub const API_URL_VAR: &str = "STAFFTRACK_API_URL";
/// Environment variable holding the login entry point path.
pub const LOGIN_PATH_VAR: &str = "STAFFTRACK_LOGIN_PATH";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base address every API path is resolved against, without a trailing `/`.
    pub api_base_url: String,
    /// Location the browser is sent to when the backend rejects the session.
    pub login_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

impl Config {
    /// Build configuration from the process environment.
    ///
    /// Loads `.env` first when one is present. Unset variables fall back to the defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_url = std::env::var(API_URL_VAR).ok();
        let login_path = std::env::var(LOGIN_PATH_VAR).ok();

        Self::from_vars(api_url.as_deref(), login_path.as_deref())
    }

    /// Build configuration from values captured when the crate was compiled.
    ///
    /// The build script forwards `.env` entries to the compiler, which is the only
    /// environment a wasm bundle has access to.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            option_env!("STAFFTRACK_API_URL"),
            option_env!("STAFFTRACK_LOGIN_PATH"),
        )
    }

    /// Validate raw values and fill in defaults for the ones that are absent or blank.
    pub fn from_vars(api_url: Option<&str>, login_path: Option<&str>) -> Result<Self, ConfigError> {
        let api_url = api_url.map(str::trim).filter(|v| !v.is_empty());
        let login_path = login_path.map(str::trim).filter(|v| !v.is_empty());

        let api_base_url = match api_url {
            Some(url) => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::InvalidEnvValue {
                        var: API_URL_VAR.to_string(),
                        reason: format!("expected an http:// or https:// address, got {:?}", url),
                    });
                }
                url.trim_end_matches('/').to_string()
            }
            None => DEFAULT_API_URL.to_string(),
        };

        let login_path = match login_path {
            Some(path) if !path.starts_with('/') => {
                return Err(ConfigError::InvalidEnvValue {
                    var: LOGIN_PATH_VAR.to_string(),
                    reason: format!("path must start with '/', got {:?}", path),
                })
            }
            Some(path) => path.to_string(),
            None => DEFAULT_LOGIN_PATH.to_string(),
        };

        Ok(Self {
            api_base_url,
            login_path,
        })
    }
}
