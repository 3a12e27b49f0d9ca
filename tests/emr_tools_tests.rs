// Clinical tools against a mocked EMR service.

use cds_agent::emr::EmrError;
use cds_agent::tooling::{AgentDeps, AgentTool, ToolError, ToolOutcome, clinical_tools};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "emr-secret";

fn deps(base_url: &str, key: Option<&str>) -> AgentDeps {
    AgentDeps::new(Client::new(), base_url, key.map(String::from))
}

async fn call(tool: &str, deps: &AgentDeps, arguments: Value) -> Result<ToolOutcome, ToolError> {
    let registry = clinical_tools();
    let tool = registry.get(tool).expect("tool registered");
    tool.call(deps, arguments).await
}

// ============================================================================
// Successful retrieval
// ============================================================================

#[tokio::test]
async fn vitals_posts_visit_with_bearer_credential() {
    let emr = MockServer::start().await;
    let records = json!([{"visitId": "V-7", "vitalName": "Heart Rate", "vitalResult": "112"}]);
    Mock::given(method("POST"))
        .and(path("/vitals"))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .and(body_json(json!({"visitId": "V-7"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(records.clone()))
        .expect(1)
        .mount(&emr)
        .await;

    let outcome = call("get_vitals", &deps(&emr.uri(), Some(API_KEY)), json!({"visit_id": "V-7"}))
        .await
        .unwrap();
    assert_eq!(outcome, ToolOutcome::Data(records));
}

#[tokio::test]
async fn vital_by_name_sends_vital_name() {
    let emr = MockServer::start().await;
    let record = json!({"visitId": "V-7", "vitalName": "Temperature", "vitalResult": "101.2"});
    Mock::given(method("POST"))
        .and(path("/vitals"))
        .and(body_json(json!({"visitId": "V-7", "vitalName": "Temperature"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(record.clone()))
        .expect(1)
        .mount(&emr)
        .await;

    let outcome = call(
        "get_vital_by_name",
        &deps(&emr.uri(), Some(API_KEY)),
        json!({"visitId": "V-7", "vitalName": "Temperature"}),
    )
    .await
    .unwrap();
    assert_eq!(outcome, ToolOutcome::Data(record));
}

#[tokio::test]
async fn each_category_hits_its_own_path() {
    let emr = MockServer::start().await;
    let cases = [
        ("get_lab_result", "/labs"),
        ("get_medications", "/medications"),
        ("get_allergies", "/allergies"),
        ("get_demographics", "/demographics"),
        ("get_problems_list", "/problems"),
    ];
    for (_, route) in cases {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"route": route}])))
            .expect(1)
            .mount(&emr)
            .await;
    }

    let deps = deps(&emr.uri(), Some(API_KEY));
    for (tool, route) in cases {
        let outcome = call(tool, &deps, json!({"visit_id": "V-7"})).await.unwrap();
        assert_eq!(outcome, ToolOutcome::Data(json!([{"route": route}])), "{tool}");
    }
}

// ============================================================================
// Empty and failing upstream
// ============================================================================

#[tokio::test]
async fn empty_payload_asks_model_to_retry() {
    let emr = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/labs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&emr)
        .await;

    let outcome = call("get_lab_result", &deps(&emr.uri(), Some(API_KEY)), json!({"visit_id": "V-7"}))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        ToolOutcome::Retryable("Could not find the lab results".into())
    );
}

#[tokio::test]
async fn upstream_error_status_fails_the_tool() {
    let emr = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/medications"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&emr)
        .await;

    let err = call("get_medications", &deps(&emr.uri(), Some(API_KEY)), json!({"visit_id": "V-7"}))
        .await
        .unwrap_err();
    match err {
        ToolError::Upstream {
            tool,
            source: EmrError::Status { status, .. },
        } => {
            assert_eq!(tool, "get_medications");
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Fallback datasets
// ============================================================================

#[tokio::test]
async fn missing_credential_never_calls_emr() {
    let emr = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&emr)
        .await;

    let deps = deps(&emr.uri(), None);
    let outcome = call("get_allergies", &deps, json!({"visit_id": "V-7"})).await.unwrap();
    let ToolOutcome::Data(Value::Array(records)) = outcome else {
        panic!("expected fallback records");
    };
    assert!(!records.is_empty());
    assert!(records.iter().all(|record| record["visitId"] == "V-7"));

    let blank = AgentDeps::new(Client::new(), emr.uri(), Some("   ".into()));
    let outcome = call("get_problems_list", &blank, json!({"visit_id": "V-7"})).await.unwrap();
    assert!(matches!(outcome, ToolOutcome::Data(_)));
}

#[tokio::test]
async fn invalid_arguments_are_reported_not_raised() {
    let outcome = call("get_vital_by_name", &deps("http://127.0.0.1:9", None), json!({"visit_id": "V-7"}))
        .await
        .unwrap();
    assert!(matches!(outcome, ToolOutcome::InvalidArguments(_)));
}
