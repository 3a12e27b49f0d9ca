mod directive;
mod errors;
mod models;
mod prompt;
mod runner;
mod runtime;


pub use directive::{AgentDirective, ToolCall};
pub use errors::AgentError;
pub use models::{AgentOptions, AgentOutcome, AgentStep, Usage};
pub use prompt::{TOOL_CALL_END, TOOL_CALL_START, TOOL_RESULT_END, TOOL_RESULT_START};
pub use runner::Agent;
pub use runtime::ToolRuntime;
