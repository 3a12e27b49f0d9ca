use super::directive::{AgentDirective, ToolCall};
use super::prompt::{
    ANSWER_FORMAT, PREAMBLE, RETRY_SUFFIX, RULES, TOOL_CALL_END, TOOL_CALL_START, TOOL_LIST_END,
    TOOL_LIST_START, TOOL_RESULT_END, TOOL_RESULT_START,
};
use crate::application::tooling::{AgentDeps, ToolError, ToolOutcome, ToolRegistry};
use serde_json::{Map, Value, json};
use tracing::{debug, info, warn};

/// Prompt composition, reply parsing and tool dispatch for one agent.
pub struct ToolRuntime {
    registry: ToolRegistry,
}

pub(crate) enum ToolResult {
    Data(Value),
    /// No data or bad arguments; counts against that tool's own budget.
    Retry(String),
    /// No such tool; counts against the malformed-reply budget.
    UnknownTool(String),
}

pub(crate) struct ToolExecution {
    pub tool: String,
    pub input: Value,
    pub result: ToolResult,
}

impl ToolRuntime {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn compose_system_prompt(&self) -> String {
        let tools = serde_json::to_string(&self.registry.specs()).unwrap_or_else(|_| "[]".into());
        format!("{PREAMBLE}\n\n{RULES}\n\n{TOOL_LIST_START}{tools}{TOOL_LIST_END}\n\n{ANSWER_FORMAT}")
    }

    pub fn tool_results_prompt(&self, results: &[Value]) -> String {
        let body = serde_json::to_string(results).unwrap_or_else(|_| "[]".into());
        format!("{TOOL_RESULT_START}{body}{TOOL_RESULT_END}")
    }

    pub fn retry_prompt(&self, reason: &str) -> String {
        format!("{reason}\n\n{RETRY_SUFFIX}")
    }

    pub fn parse_agent_action(&self, content: &str) -> AgentDirective {
        let Some(start) = content.find(TOOL_CALL_START) else {
            let response = content.trim();
            if response.is_empty() {
                return AgentDirective::Malformed {
                    reason: "Empty response. Call a function or give the final answer.".into(),
                };
            }
            return AgentDirective::Final {
                response: response.to_string(),
            };
        };

        let body = &content[start + TOOL_CALL_START.len()..];
        let body = match body.find(TOOL_CALL_END) {
            Some(end) => &body[..end],
            None => body,
        };

        match parse_calls(strip_fence(body.trim())) {
            Ok(calls) if calls.is_empty() => AgentDirective::Malformed {
                reason: "The tool call list is empty.".into(),
            },
            Ok(calls) => AgentDirective::CallTools { calls },
            Err(reason) => AgentDirective::Malformed { reason },
        }
    }

    pub(crate) async fn execute(
        &self,
        call: ToolCall,
        deps: &AgentDeps,
    ) -> Result<ToolExecution, ToolError> {
        let ToolCall { name, arguments } = call;
        let Some(tool) = self.registry.get(&name) else {
            warn!(requested_tool = %name, "Unknown tool requested by agent");
            let reason = format!(
                "Unknown tool name: '{name}'. Available tools: {}",
                self.registry.names().join(", ")
            );
            return Ok(ToolExecution {
                tool: name,
                input: arguments,
                result: ToolResult::UnknownTool(reason),
            });
        };

        let tool_name = tool.spec().name.clone();
        debug!(tool = %tool_name, input = %arguments, "Dispatching tool");
        let result = match tool.call(deps, arguments.clone()).await? {
            ToolOutcome::Data(data) => ToolResult::Data(data),
            ToolOutcome::Retryable(message) => ToolResult::Retry(message),
            ToolOutcome::InvalidArguments(reason) => ToolResult::Retry(reason),
        };
        info!(
            tool = %tool_name,
            success = matches!(result, ToolResult::Data(_)),
            "Tool executed"
        );

        Ok(ToolExecution {
            tool: tool_name,
            input: arguments,
            result,
        })
    }
}

fn strip_fence(body: &str) -> &str {
    let Some(rest) = body.strip_prefix("```") else {
        return body;
    };
    let rest = rest
        .strip_prefix("json")
        .or_else(|| rest.strip_prefix("JSON"))
        .unwrap_or(rest);
    rest.trim_end().trim_end_matches("```").trim()
}

fn parse_calls(body: &str) -> Result<Vec<ToolCall>, String> {
    let value: Value = serde_json::from_str(body)
        .map_err(|err| format!("The tool call list is not valid JSON: {err}"))?;

    let items = match value {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        other => return Err(format!("Expected a list of tool calls, got: {other}")),
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => parse_call(map),
            other => Err(format!("Each tool call must be a JSON object, got: {other}")),
        })
        .collect()
}

fn parse_call(map: Map<String, Value>) -> Result<ToolCall, String> {
    let name = map
        .get("name")
        .or_else(|| map.get("tool"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| "A tool call is missing its \"name\".".to_string())?;

    let arguments = match map.get("arguments").or_else(|| map.get("input")) {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(Value::String(raw)) => serde_json::from_str(raw)
            .map_err(|err| format!("Arguments for '{name}' are not valid JSON: {err}"))?,
        Some(other) => other.clone(),
    };

    Ok(ToolCall {
        name: name.to_string(),
        arguments,
    })
}

/// Result entry reported back to the model for one call.
pub(crate) fn result_entry(execution: &ToolExecution) -> Value {
    match &execution.result {
        ToolResult::Data(data) => json!({ "name": execution.tool, "content": data }),
        ToolResult::Retry(message) | ToolResult::UnknownTool(message) => {
            json!({ "name": execution.tool, "retry": format!("{message} {RETRY_SUFFIX}") })
        }
    }
}
