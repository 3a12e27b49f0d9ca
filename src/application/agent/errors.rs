use crate::application::tooling::ToolError;
use crate::model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error("usage limit exceeded: the run reached its ceiling of {limit} model requests")]
    UsageLimitExceeded { limit: usize },
    #[error("{subject} exceeded max retries count of {limit}")]
    RetriesExhausted { subject: String, limit: usize },
}
