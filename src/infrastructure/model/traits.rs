use super::types::{ModelError, ModelRequest, ModelResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Chat-completion backend the agent talks to.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Label recorded on agent spans and in error messages.
    fn id(&self) -> &str {
        "model"
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;
}

#[async_trait]
impl<P: ModelProvider + ?Sized> ModelProvider for Arc<P> {
    fn id(&self) -> &str {
        (**self).id()
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        (**self).chat(request).await
    }
}
