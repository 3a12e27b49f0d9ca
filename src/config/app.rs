use super::error::ConfigError;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

/// Application configuration derived from environment variables.
///
/// Built once in `main` and shared read-only behind an `Arc`.
#[derive(Clone)]
pub struct AppConfig {
    pub emr_base_url: String,
    /// Bearer credential for the EMR service. `None` selects the fallback datasets.
    pub emr_api_key: Option<String>,
    pub default_model: String,
    pub model_base_url: String,
    pub model_api_key: String,
    pub telemetry_token: Option<String>,
    pub bind: SocketAddr,
    pub request_limit: usize,
    pub max_retries: usize,
    pub tool_retries: usize,
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        super::loader::build(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        super::loader::build(lookup)
    }

    pub fn has_emr_credential(&self) -> bool {
        self.emr_api_key.is_some()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("emr_base_url", &self.emr_base_url)
            .field("emr_api_key", &self.emr_api_key.as_ref().map(|_| "<redacted>"))
            .field("default_model", &self.default_model)
            .field("model_base_url", &self.model_base_url)
            .field("model_api_key", &"<redacted>")
            .field(
                "telemetry_token",
                &self.telemetry_token.as_ref().map(|_| "<redacted>"),
            )
            .field("bind", &self.bind)
            .field("request_limit", &self.request_limit)
            .field("max_retries", &self.max_retries)
            .field("tool_retries", &self.tool_retries)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}
