pub const DEFAULT_EMR_BASE_URL: &str = "https://api.emr.com/v1";
pub const DEFAULT_MODEL_NAME: &str = "mistral:latest";
pub const DEFAULT_MODEL_BASE_URL: &str = "http://localhost:11434/v1";
pub const DEFAULT_MODEL_API_KEY: &str = "OLLAMA_LOCAL";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_REQUEST_LIMIT: usize = 20;
pub const DEFAULT_MAX_RETRIES: usize = 3;
pub const DEFAULT_TOOL_RETRIES: usize = 1;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_ENV_PATH: &str = ".env";

pub const ENV_EMR_BASE_URL: &str = "EMR_BASE_URL";
pub const ENV_EMR_API_KEY: &str = "FALCON_API_KEY";
pub const ENV_MODEL_NAME: &str = "DEFAULT_MODEL_NAME";
pub const ENV_MODEL_BASE_URL: &str = "OLLAMA_BASE_URL";
pub const ENV_MODEL_API_KEY: &str = "OLLAMA_API_KEY";
pub const ENV_TELEMETRY_TOKEN: &str = "LOGFIRE_CDSS_AGENT_TOKEN";
pub const ENV_BIND_ADDR: &str = "CDS_AGENT_BIND";
pub const ENV_REQUEST_LIMIT: &str = "CDS_AGENT_REQUEST_LIMIT";
pub const ENV_MAX_RETRIES: &str = "CDS_AGENT_MAX_RETRIES";
pub const ENV_TOOL_RETRIES: &str = "CDS_AGENT_TOOL_RETRIES";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "CDS_AGENT_HTTP_TIMEOUT_SECS";
