//! Client for OpenAI-compatible `chat/completions` endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::base::HttpClientBase;
use crate::config::AppConfig;
use crate::domain::ChatMessage;
use crate::infrastructure::model::traits::ModelProvider;
use crate::infrastructure::model::types::{ModelError, ModelRequest, ModelResponse};

const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

/// OpenAI-compatible client (Ollama `/v1`, OpenAI, Mistral, Groq, ...)
#[derive(Clone)]
pub struct OpenAIClient {
    base: HttpClientBase,
}

impl OpenAIClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            base: HttpClientBase::new("openai-compatible", endpoint, api_key, timeout)?,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ModelError> {
        Self::new(
            config.model_base_url.clone(),
            config.model_api_key.clone(),
            config.http_timeout,
        )
    }
}

#[async_trait]
impl ModelProvider for OpenAIClient {
    fn id(&self) -> &str {
        &self.base.id
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let url = self.base.build_url(CHAT_COMPLETIONS_PATH);
        let payload = OpenAIRequest::from(&request);

        info!(
            provider = self.base.id.as_str(),
            model = request.model.as_str(),
            messages = request.messages.len(),
            "Sending request to OpenAI-compatible provider"
        );

        let response: OpenAIResponse = self.base.post_with_bearer(&url, &payload).await?;
        debug!("Received response from OpenAI-compatible provider");

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .ok_or_else(|| ModelError::invalid_response(&self.base.id, "missing content"))?;

        Ok(ModelResponse::new(content))
    }
}

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIRequestMessage>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OpenAIRequestMessage {
    role: &'static str,
    content: String,
}

impl From<&ModelRequest> for OpenAIRequest {
    fn from(value: &ModelRequest) -> Self {
        Self {
            model: value.model.clone(),
            messages: value
                .messages
                .iter()
                .map(|msg: &ChatMessage| OpenAIRequestMessage {
                    role: msg.role.as_str(),
                    content: msg.content.clone(),
                })
                .collect(),
            stream: false,
        }
    }
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: Option<OpenAIMessage>,
}

#[derive(Deserialize)]
struct OpenAIMessage {
    content: Option<String>,
}
