//! HTTP entry point for the clinical decision support agent.

use cds_agent::config::{AppConfig, DEFAULT_ENV_PATH, load_env_file};
use cds_agent::model::OpenAIClient;
use cds_agent::server;
use cds_agent::service::CdsAgentService;
use cds_agent::tooling::clinical_tools;
use clap::Parser;
use std::error::Error;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "cds-agent", about = "Clinical decision support agent REST API")]
struct Args {
    /// Dotenv file read before the environment is inspected
    #[arg(long, default_value = DEFAULT_ENV_PATH)]
    env_file: PathBuf,

    /// Bind address (overrides CDS_AGENT_BIND)
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let env_loaded = load_env_file(&args.env_file)?;
    init_tracing();
    info!("Starting CDS agent");
    if env_loaded {
        info!(path = %args.env_file.display(), "Loaded environment file");
    } else {
        debug!(path = %args.env_file.display(), "No environment file found, using process environment");
    }

    let config = AppConfig::from_env()?;
    debug!(?config, "Configuration loaded");

    if !config.has_emr_credential() {
        warn!("No EMR credential configured; tools will answer from built-in sample data");
    }
    if config.telemetry_token.is_some() {
        info!("Telemetry token present; spans are emitted through the tracing subscriber");
    }

    let addr = args.addr.unwrap_or(config.bind);
    let provider = OpenAIClient::from_config(&config)?;
    let service = Arc::new(CdsAgentService::new(
        Arc::new(config),
        Arc::new(provider),
        clinical_tools(),
    ));

    info!(%addr, tools = service.tools().len(), "REST server starting");
    server::serve(service, addr).await?;

    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
