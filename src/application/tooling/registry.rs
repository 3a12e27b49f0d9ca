use super::deps::AgentDeps;
use super::error::ToolError;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::ToSchema;

/// Name, description and JSON input schema advertised to the model.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    #[schema(value_type = Object)]
    pub parameters: Value,
}

/// Result of a tool call that did not fail outright.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    /// Data to hand back to the model.
    Data(Value),
    /// Nothing usable; the model should try another tool or go without.
    Retryable(String),
    /// The model's arguments did not match the tool's schema.
    InvalidArguments(String),
}

#[async_trait]
pub trait AgentTool: Send + Sync {
    fn spec(&self) -> &ToolSpec;

    async fn call(&self, deps: &AgentDeps, arguments: Value) -> Result<ToolOutcome, ToolError>;
}

/// Explicit name → handler table passed to the agent at construction.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn AgentTool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool. A later registration under the same name replaces the
    /// earlier one.
    pub fn register(&mut self, tool: Arc<dyn AgentTool>) -> &mut Self {
        let key = tool.spec().name.to_lowercase();
        match self.index.get(&key) {
            Some(&slot) => self.tools[slot] = tool,
            None => {
                self.index.insert(key, self.tools.len());
                self.tools.push(tool);
            }
        }
        self
    }

    pub fn with(mut self, tool: Arc<dyn AgentTool>) -> Self {
        self.register(tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn AgentTool>> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|&slot| Arc::clone(&self.tools[slot]))
    }

    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(|tool| tool.spec().clone()).collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.tools.iter().map(|tool| tool.spec().name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoTool {
        spec: ToolSpec,
        reply: &'static str,
    }

    impl EchoTool {
        fn new(name: &str, reply: &'static str) -> Arc<dyn AgentTool> {
            Arc::new(Self {
                spec: ToolSpec {
                    name: name.to_string(),
                    description: "echo".into(),
                    parameters: json!({"type": "object"}),
                },
                reply,
            })
        }
    }

    #[async_trait]
    impl AgentTool for EchoTool {
        fn spec(&self) -> &ToolSpec {
            &self.spec
        }

        async fn call(&self, _deps: &AgentDeps, _arguments: Value) -> Result<ToolOutcome, ToolError> {
            Ok(ToolOutcome::Data(json!(self.reply)))
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = ToolRegistry::new().with(EchoTool::new("get_vitals", "a"));
        assert!(registry.get("GET_VITALS").is_some());
        assert!(registry.get(" get_vitals ").is_some());
        assert!(registry.get("get_labs").is_none());
    }

    #[test]
    fn re_registering_replaces_in_place() {
        let registry = ToolRegistry::new()
            .with(EchoTool::new("first", "a"))
            .with(EchoTool::new("second", "b"))
            .with(EchoTool::new("first", "c"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["first", "second"]);
    }
}
