//! Close CRM MCP Server
//!
//! Serves the Close tools over the MCP stdio transport. Configuration comes from flags, the
//! environment, or a `.env` file in the working directory.

use clap::Parser as _;
use close_mcp_server::CloseMcpServer;
use close_mcp_server::config::{Cli, init_logging};
use rmcp::ServiceExt as _;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let settings = Cli::parse().into_settings()?;
    init_logging(&settings.log_level, settings.log_format)?;

    let client = settings.client()?;
    info!(base_url = client.base_url(), "close-mcp-server starting (stdio transport)");

    let service = CloseMcpServer::new(client)
        .serve(rmcp::transport::io::stdio())
        .await?;
    service.waiting().await?;

    info!("close-mcp-server stopped");
    Ok(())
}
