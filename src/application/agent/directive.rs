use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ToolCall {
    pub name: String,
    pub arguments: Value,
}

#[derive(Debug, PartialEq)]
pub enum AgentDirective {
    Final { response: String },
    CallTools { calls: Vec<ToolCall> },
    Malformed { reason: String },
}
