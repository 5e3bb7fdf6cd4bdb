//! hello-engine: engine fixture speaking the line protocol on stdio
//!
//! Reads harness commands from stdin and writes engine output to stdout.
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default: info).

use anyhow::Result;
use hello_engine::HelloEngine;
use lineproto_server::LineServer;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let server = LineServer::new(HelloEngine::new());
    server
        .run_stdio()
        .await
        .map_err(|e| anyhow::anyhow!("Engine error: {}", e))?;

    info!("Engine shut down");
    Ok(())
}
