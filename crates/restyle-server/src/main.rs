use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use restyle_model::TextModel;
use restyle_server::config::ServerConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let addr = config.socket_addr()?;

    let backend = config.build_backend();
    if !backend.has_api_key() {
        warn!("GOOGLE_AI_KEY is not set; rewrite requests will fail");
    }
    info!(
        "backend: {} ({})",
        backend.name(),
        backend.model_hint().unwrap_or("default")
    );
    let model: Arc<dyn TextModel> = Arc::new(backend);

    let listener = TcpListener::bind(addr).await?;
    info!("restyle-server listening on http://{addr}");

    restyle_server::serve(listener, model).await
}
