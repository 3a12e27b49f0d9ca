use crate::config::{
    DEFAULT_MAX_RETRIES, DEFAULT_MODEL_NAME, DEFAULT_REQUEST_LIMIT, DEFAULT_TOOL_RETRIES,
};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct AgentStep {
    pub tool: String,
    pub input: Value,
    pub success: bool,
    pub output: Value,
    pub message: Option<String>,
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    pub requests: usize,
    pub tool_calls: usize,
}

#[derive(Debug, Clone)]
pub struct AgentOutcome {
    pub run_id: String,
    pub response: String,
    pub steps: Vec<AgentStep>,
    pub usage: Usage,
}

#[derive(Debug, Clone)]
pub struct AgentOptions {
    pub model: String,
    /// Usage ceiling: model requests allowed per run.
    pub request_limit: usize,
    /// Retries allowed for unparseable replies and unknown tool names.
    pub max_retries: usize,
    /// Consecutive retries allowed per tool; a successful call resets the count.
    pub tool_retries: usize,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL_NAME.to_string(),
            request_limit: DEFAULT_REQUEST_LIMIT,
            max_retries: DEFAULT_MAX_RETRIES,
            tool_retries: DEFAULT_TOOL_RETRIES,
        }
    }
}
