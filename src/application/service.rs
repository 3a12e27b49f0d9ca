//! Orchestration entry point: one clinical question about one visit.

use crate::application::agent::{Agent, AgentError, AgentOptions, AgentOutcome};
use crate::application::tooling::{AgentDeps, ToolRegistry, ToolSpec};
use crate::config::AppConfig;
use crate::domain::{CdsAgentInput, CdsAgentOutput, VerdictError};
use crate::model::ModelProvider;
use reqwest::Client;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to build HTTP client for the run: {0}")]
    HttpClient(#[source] reqwest::Error),
    #[error(transparent)]
    Agent(#[from] AgentError),
    #[error(transparent)]
    Verdict(#[from] VerdictError),
}

pub struct CdsAgentService<P: ModelProvider> {
    config: Arc<AppConfig>,
    agent: Agent<P>,
}

impl<P: ModelProvider> CdsAgentService<P> {
    pub fn new(config: Arc<AppConfig>, provider: Arc<P>, registry: ToolRegistry) -> Self {
        Self {
            config,
            agent: Agent::new(provider, registry),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn tools(&self) -> Vec<ToolSpec> {
        self.agent.registry().specs()
    }

    /// Combined prompt handed to the agent.
    pub fn compose_prompt(input: &CdsAgentInput) -> String {
        format!("{} For the Patient Visit:{}", input.cdss_query, input.visit_id)
    }

    /// The request's model when it names one, otherwise the configured default.
    pub fn resolve_model(&self, input: &CdsAgentInput) -> String {
        let requested = input.model_name.trim();
        if requested.is_empty() {
            self.config.default_model.clone()
        } else {
            requested.to_string()
        }
    }

    /// Runs the agent and returns its final text unvalidated.
    pub async fn run(&self, input: &CdsAgentInput) -> Result<AgentOutcome, ServiceError> {
        let http = Client::builder()
            .timeout(self.config.http_timeout)
            .build()
            .map_err(ServiceError::HttpClient)?;
        let deps = AgentDeps::new(
            http,
            self.config.emr_base_url.clone(),
            self.config.emr_api_key.clone(),
        );
        let options = AgentOptions {
            model: self.resolve_model(input),
            request_limit: self.config.request_limit,
            max_retries: self.config.max_retries,
            tool_retries: self.config.tool_retries,
        };

        info!(
            visit_id = %input.visit_id,
            model = %options.model,
            emr = deps.emr_api_key.is_some(),
            "Running CDS agent"
        );
        let outcome = self
            .agent
            .run(Self::compose_prompt(input), &deps, options)
            .await?;
        info!(
            visit_id = %input.visit_id,
            run_id = %outcome.run_id,
            requests = outcome.usage.requests,
            "CDS agent finished"
        );
        Ok(outcome)
    }

    /// Runs the agent and parses its verdict block.
    pub async fn evaluate(&self, input: &CdsAgentInput) -> Result<CdsAgentOutput, ServiceError> {
        let outcome = self.run(input).await?;
        CdsAgentOutput::from_response(&outcome.response).map_err(|err| {
            warn!(run_id = %outcome.run_id, %err, "Agent reply has no parseable verdict");
            ServiceError::from(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_appends_visit() {
        let input = CdsAgentInput {
            visit_id: "V-42".into(),
            cdss_query: "Does the patient meet sepsis criteria?".into(),
            model_name: String::new(),
        };
        assert_eq!(
            CdsAgentService::<crate::model::OpenAIClient>::compose_prompt(&input),
            "Does the patient meet sepsis criteria? For the Patient Visit:V-42"
        );
    }
}
