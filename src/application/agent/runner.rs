use super::directive::AgentDirective;
use super::errors::AgentError;
use super::models::{AgentOptions, AgentOutcome, AgentStep, Usage};
use super::runtime::{ToolResult, ToolRuntime, result_entry};
use crate::application::tooling::{AgentDeps, ToolRegistry};
use crate::domain::ChatMessage;
use crate::model::{ModelProvider, ModelRequest};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

const MALFORMED_SUBJECT: &str = "model response";

pub struct Agent<P: ModelProvider> {
    provider: Arc<P>,
    runtime: ToolRuntime,
}

impl<P: ModelProvider> Agent<P> {
    pub fn new(provider: Arc<P>, registry: ToolRegistry) -> Self {
        Self {
            provider,
            runtime: ToolRuntime::new(registry),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        self.runtime.registry()
    }

    pub fn system_prompt(&self) -> String {
        self.runtime.compose_system_prompt()
    }

    /// Drives the model until it produces a final answer, dispatching any
    /// tool calls it requests along the way.
    pub async fn run(
        &self,
        prompt: String,
        deps: &AgentDeps,
        options: AgentOptions,
    ) -> Result<AgentOutcome, AgentError> {
        let run_id = Uuid::new_v4().to_string();
        let span = info_span!(
            "agent.run",
            run_id = %run_id,
            provider = self.provider.id(),
            model = %options.model
        );
        self.drive(run_id, prompt, deps, options).instrument(span).await
    }

    async fn drive(
        &self,
        run_id: String,
        prompt: String,
        deps: &AgentDeps,
        options: AgentOptions,
    ) -> Result<AgentOutcome, AgentError> {
        info!("Agent run started");
        let mut messages = vec![
            ChatMessage::system(self.runtime.compose_system_prompt()),
            ChatMessage::user(prompt),
        ];
        let mut usage = Usage::default();
        let mut steps = Vec::new();
        let mut tool_retries: HashMap<String, usize> = HashMap::new();
        let mut malformed_retries = 0usize;

        loop {
            if usage.requests >= options.request_limit {
                warn!(limit = options.request_limit, "Agent exceeded usage ceiling");
                return Err(AgentError::UsageLimitExceeded {
                    limit: options.request_limit,
                });
            }
            usage.requests += 1;
            debug!(
                request = usage.requests,
                limit = options.request_limit,
                "Submitting agent turn to model provider"
            );

            let response = self
                .provider
                .chat(ModelRequest {
                    model: options.model.clone(),
                    messages: messages.clone(),
                })
                .await?;
            let content = response.message.content;
            messages.push(ChatMessage::assistant(content.clone()));

            match self.runtime.parse_agent_action(&content) {
                AgentDirective::Final { response } => {
                    info!(
                        requests = usage.requests,
                        tool_calls = usage.tool_calls,
                        "Agent returned final response"
                    );
                    return Ok(AgentOutcome {
                        run_id,
                        response,
                        steps,
                        usage,
                    });
                }
                AgentDirective::Malformed { reason } => {
                    malformed_retries += 1;
                    warn!(%reason, attempt = malformed_retries, "Model reply could not be parsed");
                    if malformed_retries > options.max_retries {
                        return Err(AgentError::RetriesExhausted {
                            subject: MALFORMED_SUBJECT.to_string(),
                            limit: options.max_retries,
                        });
                    }
                    messages.push(ChatMessage::user(self.runtime.retry_prompt(&reason)));
                }
                AgentDirective::CallTools { calls } => {
                    info!(count = calls.len(), "Agent requested tool execution");
                    let mut results = Vec::with_capacity(calls.len());
                    for call in calls {
                        usage.tool_calls += 1;
                        let execution = self.runtime.execute(call, deps).await?;

                        match &execution.result {
                            ToolResult::Data(_) => {
                                tool_retries.remove(&execution.tool);
                            }
                            ToolResult::Retry(message) => {
                                let count = tool_retries.entry(execution.tool.clone()).or_default();
                                *count += 1;
                                warn!(tool = %execution.tool, attempt = *count, %message, "Tool asked the model to retry");
                                if *count > options.tool_retries {
                                    return Err(AgentError::RetriesExhausted {
                                        subject: format!("tool '{}'", execution.tool),
                                        limit: options.tool_retries,
                                    });
                                }
                            }
                            ToolResult::UnknownTool(reason) => {
                                malformed_retries += 1;
                                warn!(tool = %execution.tool, %reason, "Tool call rejected");
                                if malformed_retries > options.max_retries {
                                    return Err(AgentError::RetriesExhausted {
                                        subject: MALFORMED_SUBJECT.to_string(),
                                        limit: options.max_retries,
                                    });
                                }
                            }
                        }

                        results.push(result_entry(&execution));
                        steps.push(step_from(execution));
                    }
                    messages.push(ChatMessage::user(self.runtime.tool_results_prompt(&results)));
                }
            }
        }
    }
}

fn step_from(execution: super::runtime::ToolExecution) -> AgentStep {
    let (success, output, message) = match execution.result {
        ToolResult::Data(data) => (true, data, None),
        ToolResult::Retry(message) | ToolResult::UnknownTool(message) => {
            (false, Value::Null, Some(message))
        }
    };
    AgentStep {
        tool: execution.tool,
        input: execution.input,
        success,
        output,
        message,
    }
}
