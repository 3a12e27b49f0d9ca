mod docs;
mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use dto::{ErrorResponse, MessageResponse, ToolInventoryResponse};
pub use error::ServerError;
pub use router::router;
pub use state::ServerState;

use crate::application::service::CdsAgentService;
use crate::model::ModelProvider;
use std::net::SocketAddr;
use std::sync::Arc;

pub async fn serve<P>(service: Arc<CdsAgentService<P>>, addr: SocketAddr) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    router::serve(service, addr).await
}
