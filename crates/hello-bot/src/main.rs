//! hello-bot: bot fixture speaking the line protocol on stdio

use anyhow::Result;
use hello_bot::HelloBot;
use lineproto_server::LineServer;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stdout carries the protocol
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let server = LineServer::new(HelloBot::new());
    server
        .run_stdio()
        .await
        .map_err(|e| anyhow::anyhow!("Bot error: {}", e))?;

    info!("Bot shutting down");
    Ok(())
}
