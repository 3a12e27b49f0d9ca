use crate::infrastructure::emr::EmrError;
use thiserror::Error;

/// Failures that abort a tool call. Recoverable conditions are reported as
/// [`super::ToolOutcome`] variants instead.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("tool '{tool}' failed: {source}")]
    Upstream {
        tool: String,
        #[source]
        source: EmrError,
    },
    #[error("tool '{tool}' could not encode its result: {source}")]
    Encode {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
}
