//! Client for the upstream Electronic Medical Record service.
//!
//! Every category lives at `{base}/{category}` and is fetched with a single
//! bearer-authenticated POST whose body carries at least `visitId`.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{Instrument, debug, info_span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmrCategory {
    Vitals,
    Labs,
    Medications,
    Allergies,
    Demographics,
    Problems,
}

impl EmrCategory {
    pub fn path(self) -> &'static str {
        match self {
            EmrCategory::Vitals => "vitals",
            EmrCategory::Labs => "labs",
            EmrCategory::Medications => "medications",
            EmrCategory::Allergies => "allergies",
            EmrCategory::Demographics => "demographics",
            EmrCategory::Problems => "problems",
        }
    }
}

#[derive(Debug, Error)]
pub enum EmrError {
    #[error("EMR request to /{path} failed: {source}")]
    Network {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("EMR service returned {status} for /{path}")]
    Status {
        path: &'static str,
        status: StatusCode,
    },
    #[error("EMR service returned malformed JSON for /{path}: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Bearer-authenticated handle on the EMR service, scoped to one agent run.
#[derive(Clone)]
pub struct EmrGateway {
    http: Client,
    base_url: String,
    api_key: String,
}

impl EmrGateway {
    pub fn new(http: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn url(&self, category: EmrCategory) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), category.path())
    }

    pub async fn fetch(&self, category: EmrCategory, payload: &Value) -> Result<Value, EmrError> {
        let path = category.path();
        let url = self.url(category);
        let visit_id = payload.get("visitId").and_then(Value::as_str).unwrap_or_default();
        let span = info_span!("emr.request", category = path, visit_id);

        async move {
            debug!(url = %url, %payload, "Calling EMR API");
            let response = self
                .http
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(payload)
                .send()
                .await
                .map_err(|source| EmrError::Network { path, source })?;

            let status = response.status();
            if !status.is_success() {
                return Err(EmrError::Status { path, status });
            }

            let data: Value = response
                .json()
                .await
                .map_err(|source| EmrError::Decode { path, source })?;
            debug!(response = %data, "EMR API responded");
            Ok(data)
        }
        .instrument(span)
        .await
    }
}

/// True when the EMR reply carries no usable data.
pub fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_joins_base_and_category() {
        let gateway = EmrGateway::new(Client::new(), "https://api.emr.com/v1/", "key");
        assert_eq!(
            gateway.url(EmrCategory::Demographics),
            "https://api.emr.com/v1/demographics"
        );
    }

    #[test]
    fn empty_payload_detection() {
        assert!(is_empty_payload(&Value::Null));
        assert!(is_empty_payload(&json!([])));
        assert!(is_empty_payload(&json!({})));
        assert!(is_empty_payload(&json!("  ")));
        assert!(!is_empty_payload(&json!([{"visitId": "V1"}])));
        assert!(!is_empty_payload(&json!(0)));
    }
}
