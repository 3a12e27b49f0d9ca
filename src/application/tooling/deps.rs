use crate::infrastructure::emr::EmrGateway;
use reqwest::Client;

/// Per-run dependencies handed to every tool call.
///
/// Built once per orchestration call and dropped with it, which releases the
/// HTTP client's connections.
#[derive(Clone)]
pub struct AgentDeps {
    pub http: Client,
    pub emr_base_url: String,
    pub emr_api_key: Option<String>,
}

impl AgentDeps {
    pub fn new(http: Client, emr_base_url: impl Into<String>, emr_api_key: Option<String>) -> Self {
        Self {
            http,
            emr_base_url: emr_base_url.into(),
            emr_api_key: emr_api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    /// Returns the EMR gateway, or `None` when no credential is configured and
    /// tools must answer from their fallback datasets.
    pub fn emr(&self) -> Option<EmrGateway> {
        self.emr_api_key
            .as_ref()
            .map(|key| EmrGateway::new(self.http.clone(), self.emr_base_url.clone(), key.clone()))
    }
}
