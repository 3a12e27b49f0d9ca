use crate::application::service::CdsAgentService;
use crate::model::ModelProvider;
use std::sync::Arc;

pub struct ServerState<P: ModelProvider> {
    service: Arc<CdsAgentService<P>>,
}

impl<P: ModelProvider> ServerState<P> {
    pub fn new(service: Arc<CdsAgentService<P>>) -> Self {
        Self { service }
    }

    pub(crate) fn service(&self) -> Arc<CdsAgentService<P>> {
        Arc::clone(&self.service)
    }
}
