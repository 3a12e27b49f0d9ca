use super::super::dto::{ErrorResponse, ToolInventoryResponse};
use super::super::state::ServerState;
use crate::domain::{CdsAgentInput, CdsAgentOutput};
use crate::model::ModelProvider;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, error, info};

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn internal_error(err: impl Display) -> HandlerError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: err.to_string(),
        }),
    )
}

#[utoipa::path(
    post,
    path = "/cdsagent/run",
    tag = "cdsagent",
    request_body = CdsAgentInput,
    responses(
        (status = 200, description = "Raw final answer of the model", body = String, content_type = "text/plain"),
        (status = 422, description = "Request body is missing a required field"),
        (status = 500, description = "Agent run failed", body = ErrorResponse)
    )
)]
pub async fn run_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    Json(payload): Json<CdsAgentInput>,
) -> Result<String, HandlerError> {
    info!(visit_id = %payload.visit_id, model = %payload.model_name, "Received /cdsagent/run request");

    match state.service().run(&payload).await {
        Ok(outcome) => {
            info!(run_id = %outcome.run_id, steps = outcome.steps.len(), "Agent run completed successfully");
            Ok(outcome.response)
        }
        Err(err) => {
            error!(%err, visit_id = %payload.visit_id, "Agent run failed");
            Err(internal_error(err))
        }
    }
}

#[utoipa::path(
    post,
    path = "/cdsagent/evaluate",
    tag = "cdsagent",
    request_body = CdsAgentInput,
    responses(
        (status = 200, description = "Parsed verdict", body = CdsAgentOutput),
        (status = 422, description = "Request body is missing a required field"),
        (status = 500, description = "Agent run failed or returned no verdict", body = ErrorResponse)
    )
)]
pub async fn evaluate_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    Json(payload): Json<CdsAgentInput>,
) -> Result<Json<CdsAgentOutput>, HandlerError> {
    info!(visit_id = %payload.visit_id, model = %payload.model_name, "Received /cdsagent/evaluate request");

    state.service().evaluate(&payload).await.map(Json).map_err(|err| {
        error!(%err, visit_id = %payload.visit_id, "Agent evaluation failed");
        internal_error(err)
    })
}

#[utoipa::path(
    get,
    path = "/cdsagent/tools",
    tag = "cdsagent",
    responses(
        (status = 200, description = "Tools the agent may call", body = ToolInventoryResponse)
    )
)]
pub async fn tools_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
) -> Json<ToolInventoryResponse> {
    let tools = state.service().tools();
    debug!(tool_count = tools.len(), "Serving /cdsagent/tools request");
    Json(ToolInventoryResponse { tools })
}
