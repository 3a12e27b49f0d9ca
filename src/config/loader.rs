use super::app::AppConfig;
use super::defaults::*;
use super::error::ConfigError;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Seeds the process environment from a dotenv file when it exists and
/// reports whether it did.
///
/// Runs before the subscriber is installed so `RUST_LOG` may come from the
/// file; callers log the result. Variables already present in the environment
/// win over the file.
pub fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    if !path.exists() {
        return Ok(false);
    }
    dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
        path: path.display().to_string(),
        source,
    })?;
    Ok(true)
}

pub(super) fn build<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| {
        lookup(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };

    let bind_raw = read(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let bind: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::InvalidAddress {
        name: ENV_BIND_ADDR,
        value: bind_raw.clone(),
    })?;

    let config = AppConfig {
        emr_base_url: read(ENV_EMR_BASE_URL).unwrap_or_else(|| DEFAULT_EMR_BASE_URL.to_string()),
        emr_api_key: read(ENV_EMR_API_KEY),
        default_model: read(ENV_MODEL_NAME).unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string()),
        model_base_url: read(ENV_MODEL_BASE_URL)
            .unwrap_or_else(|| DEFAULT_MODEL_BASE_URL.to_string()),
        model_api_key: read(ENV_MODEL_API_KEY)
            .unwrap_or_else(|| DEFAULT_MODEL_API_KEY.to_string()),
        telemetry_token: read(ENV_TELEMETRY_TOKEN),
        bind,
        request_limit: parse_positive(ENV_REQUEST_LIMIT, read(ENV_REQUEST_LIMIT))?
            .unwrap_or(DEFAULT_REQUEST_LIMIT),
        max_retries: parse_count(ENV_MAX_RETRIES, read(ENV_MAX_RETRIES))?
            .unwrap_or(DEFAULT_MAX_RETRIES),
        tool_retries: parse_count(ENV_TOOL_RETRIES, read(ENV_TOOL_RETRIES))?
            .unwrap_or(DEFAULT_TOOL_RETRIES),
        http_timeout: Duration::from_secs(
            parse_positive(ENV_HTTP_TIMEOUT_SECS, read(ENV_HTTP_TIMEOUT_SECS))?
                .map(|secs| secs as u64)
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        ),
    };

    debug!(?config, "Configuration resolved");
    Ok(config)
}

fn parse_positive(name: &'static str, value: Option<String>) -> Result<Option<usize>, ConfigError> {
    match value {
        Some(raw) if raw.parse::<usize>() == Ok(0) => {
            Err(ConfigError::InvalidNumber { name, value: raw })
        }
        other => parse_count(name, other),
    }
}

/// Like `parse_positive` but zero is allowed.
fn parse_count(name: &'static str, value: Option<String>) -> Result<Option<usize>, ConfigError> {
    value
        .map(|raw| {
            raw.parse::<usize>()
                .map_err(|_| ConfigError::InvalidNumber { name, value: raw })
        })
        .transpose()
}
