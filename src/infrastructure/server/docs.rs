use super::dto::{ErrorResponse, MessageResponse, ToolInventoryResponse};
use super::routes;
use crate::application::tooling::ToolSpec;
use crate::domain::CdsAgentInput;
use crate::domain::CdsAgentOutput;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::root::root_handler,
        routes::root::agent_root_handler,
        routes::agent::run_handler,
        routes::agent::evaluate_handler,
        routes::agent::tools_handler
    ),
    components(
        schemas(
            CdsAgentInput,
            CdsAgentOutput,
            ErrorResponse,
            MessageResponse,
            ToolInventoryResponse,
            ToolSpec
        )
    ),
    tags(
        (name = "health", description = "Liveness messages"),
        (name = "cdsagent", description = "Clinical decision support agent")
    )
)]
pub(super) struct ApiDoc;
