use super::super::dto::MessageResponse;
use axum::Json;

pub const ROOT_MESSAGE: &str = "Welcome to CDS AGENT FAST API!";
pub const AGENT_ROOT_MESSAGE: &str = "Welcome to AGENTS FAST API!";

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service is up", body = MessageResponse))
)]
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new(ROOT_MESSAGE))
}

#[utoipa::path(
    get,
    path = "/cdsagent/",
    tag = "health",
    responses((status = 200, description = "Agent router is up", body = MessageResponse))
)]
pub async fn agent_root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new(AGENT_ROOT_MESSAGE))
}
