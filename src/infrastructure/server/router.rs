use super::docs::ApiDoc;
use super::error::ServerError;
use super::routes;
use super::state::ServerState;
use crate::application::service::CdsAgentService;
use crate::model::ModelProvider;
use axum::Router;
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router without binding a socket.
pub fn router<P>(service: Arc<CdsAgentService<P>>) -> Router
where
    P: ModelProvider + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = Arc::new(ServerState::new(service));
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .route("/", get(routes::root::root_handler))
        .route("/cdsagent", get(routes::root::agent_root_handler))
        .route("/cdsagent/", get(routes::root::agent_root_handler))
        .route("/cdsagent/run", post(routes::agent::run_handler::<P>))
        .route("/cdsagent/evaluate", post(routes::agent::evaluate_handler::<P>))
        .route("/cdsagent/tools", get(routes::agent::tools_handler::<P>))
        .layer(cors)
        .with_state(state)
}

pub(super) async fn serve<P>(
    service: Arc<CdsAgentService<P>>,
    addr: SocketAddr,
) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    info!(%addr, "Binding REST server");
    let app = router(service);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "REST server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(|source| ServerError::Serve { addr, source })
}
