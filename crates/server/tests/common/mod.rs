#![allow(dead_code)]

use anyhow::Context as _;
use close_mcp_server::CloseMcpServer;
use close_mcp_test_support::{MockCloseApi, MockResponse, RecordedRequest};
use close_mcp_tools::CloseClient;
use rmcp::model::{CallToolRequestParams, ClientInfo, Tool};
use rmcp::service::RunningService;
use rmcp::{ClientHandler, RoleClient, ServiceExt as _};
use serde_json::Value;
use tokio::task::JoinHandle;

pub const API_KEY: &str = "api_test";

#[derive(Debug, Clone, Default)]
pub struct DummyClient;

impl ClientHandler for DummyClient {
    fn get_info(&self) -> ClientInfo {
        ClientInfo::default()
    }
}

/// Text and error flag of one tool result.
#[derive(Debug)]
pub struct ToolOutput {
    pub is_error: bool,
    pub text: String,
}

/// A mock Close API, the MCP server pointed at it, and a connected MCP client.
pub struct Harness {
    pub api: MockCloseApi,
    client: RunningService<RoleClient, DummyClient>,
    server: JoinHandle<anyhow::Result<()>>,
}

impl Harness {
    pub async fn start<F>(handler: F) -> anyhow::Result<Self>
    where
        F: Fn(&RecordedRequest) -> MockResponse + Send + Sync + 'static,
    {
        let api = MockCloseApi::start(handler).await?;
        let close = CloseClient::new(API_KEY, api.base_url(), None).context("close client")?;

        let (server_transport, client_transport) = tokio::io::duplex(64 * 1024);
        let server = tokio::spawn(async move {
            let service = CloseMcpServer::new(close).serve(server_transport).await?;
            service.waiting().await?;
            anyhow::Ok(())
        });
        let client = DummyClient
            .serve(client_transport)
            .await
            .context("mcp client handshake")?;

        Ok(Self { api, client, server })
    }

    pub async fn tools(&self) -> anyhow::Result<Vec<Tool>> {
        Ok(self.client.list_tools(None).await?.tools)
    }

    pub async fn call(&self, name: &str, args: Value) -> anyhow::Result<ToolOutput> {
        let result = self
            .client
            .call_tool(CallToolRequestParams {
                meta: None,
                name: name.to_string().into(),
                arguments: args.as_object().cloned(),
                task: None,
            })
            .await
            .with_context(|| format!("call {name}"))?;

        let text = result
            .content
            .first()
            .and_then(|c| c.raw.as_text())
            .map(|t| t.text.clone())
            .context("expected text content")?;
        Ok(ToolOutput {
            is_error: result.is_error.unwrap_or(false),
            text,
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.api.requests()
    }

    pub async fn shutdown(self) -> anyhow::Result<()> {
        self.client.cancel().await?;
        self.server.await??;
        Ok(())
    }
}
