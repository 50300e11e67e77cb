use std::env;
use std::fmt;

/// Interface the server listens on.
pub const HOST: &str = "0.0.0.0";
/// Fixed listening port, also reported by `/health`.
pub const PORT: u16 = 5001;
/// Azure OpenAI REST API version sent with every completion call.
pub const API_VERSION: &str = "2025-01-01-preview";

pub const API_KEY_VAR: &str = "AZURE_OPENAI_API_KEY";
pub const ENDPOINT_VAR: &str = "ENDPOINT_URL";
pub const DEPLOYMENT_VAR: &str = "DEPLOYMENT_NAME";
pub const SEARCH_ENDPOINT_VAR: &str = "SEARCH_ENDPOINT";
pub const SEARCH_KEY_VAR: &str = "SEARCH_KEY";

/// Process-wide settings, read once at startup and never mutated.
///
/// Every environment-sourced value is optional here. An absent value only
/// becomes an error when the completion adapter needs it for a call.
#[derive(Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_version: String,
    pub endpoint: Option<String>,
    pub deployment: Option<String>,
    pub search_endpoint: Option<String>,
    pub search_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty strings count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_key: get(API_KEY_VAR),
            api_version: API_VERSION.to_string(),
            endpoint: get(ENDPOINT_VAR),
            deployment: get(DEPLOYMENT_VAR),
            search_endpoint: get(SEARCH_ENDPOINT_VAR),
            search_key: get(SEARCH_KEY_VAR),
        }
    }
}

// Keys are reported as set or unset, never printed
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");

        f.debug_struct("Config")
            .field("api_key", &redacted(&self.api_key))
            .field("api_version", &self.api_version)
            .field("endpoint", &self.endpoint)
            .field("deployment", &self.deployment)
            .field("search_endpoint", &self.search_endpoint)
            .field("search_key", &redacted(&self.search_key))
            .finish()
    }
}
