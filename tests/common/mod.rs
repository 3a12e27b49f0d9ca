#![allow(dead_code)]

use async_trait::async_trait;
use cds_agent::config::AppConfig;
use cds_agent::model::{ModelError, ModelProvider, ModelRequest, ModelResponse};
use cds_agent::service::CdsAgentService;
use cds_agent::tooling::clinical_tools;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const VERDICT: &str = "```json\n{\n  \"CriteriaMet\": \"Yes\",\n  \"explanation\": [\"Heart Rate 98 > 90\", \"Temperature 101F > 100.4F\"]\n}\n```";

/// Model double that replays canned replies and records every request.
#[derive(Clone)]
pub struct ScriptedProvider {
    responses: Arc<Mutex<Vec<String>>>,
    failure: Option<String>,
    recordings: Arc<Mutex<Vec<ModelRequest>>>,
}

impl ScriptedProvider {
    pub fn new(responses: &[&str]) -> Self {
        Self {
            responses: Arc::new(Mutex::new(
                responses.iter().map(|r| r.to_string()).collect(),
            )),
            failure: None,
            recordings: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::new(&[])
        }
    }

    pub async fn requests(&self) -> Vec<ModelRequest> {
        self.recordings.lock().await.clone()
    }
}

#[async_trait]
impl ModelProvider for ScriptedProvider {
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        self.recordings.lock().await.push(request);
        if let Some(reason) = &self.failure {
            return Err(ModelError::invalid_response("scripted", reason.clone()));
        }
        let mut responses = self.responses.lock().await;
        match responses.len() {
            0 => Err(ModelError::invalid_response("scripted", "script exhausted")),
            1 => Ok(ModelResponse::new(responses[0].clone())),
            _ => Ok(ModelResponse::new(responses.remove(0))),
        }
    }
}

pub fn config(vars: &[(&str, &str)]) -> AppConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(move |name: &str| vars.get(name).cloned()).expect("valid test config")
}

/// Config without an EMR credential, so tools answer from sample data.
pub fn offline_config() -> AppConfig {
    config(&[])
}

/// Config pointing the EMR gateway at a mock server.
pub fn emr_config(base_url: &str) -> AppConfig {
    config(&[("EMR_BASE_URL", base_url), ("FALCON_API_KEY", "test-emr-key")])
}

pub fn service(
    config: AppConfig,
    provider: ScriptedProvider,
) -> Arc<CdsAgentService<ScriptedProvider>> {
    Arc::new(CdsAgentService::new(
        Arc::new(config),
        Arc::new(provider),
        clinical_tools(),
    ))
}

pub fn tool_call(name: &str, arguments: serde_json::Value) -> String {
    format!(
        "<|tool_call_start|>[{}]<|tool_call_end|>",
        serde_json::json!({ "name": name, "arguments": arguments })
    )
}
