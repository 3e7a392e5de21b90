//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the Voicebox tools.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - `to_tool()` metadata (name, title, schema, read-only annotation)
//! - `create_route()` for the rmcp router (STDIO transport)
//! - `http_handler()` called via ToolRegistry for HTTP transport
//!
//! All of them go through the shared `ToolDispatcher`, which owns the
//! Voicebox client and the fallback credentials.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{ToolDispatcher, ToolRegistry, build_tool_router};
use crate::domains::voicebox::CloudClient;

#[cfg(feature = "http")]
use super::headers::RequestHeaders;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Instructions sent to clients on initialization.
pub const INSTRUCTIONS: &str = "Stardog Cloud Voicebox server. Use voicebox_ask to answer \
    questions about your data, voicebox_generate_query to get the SPARQL for a question and \
    voicebox_settings to inspect the Voicebox application.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Cloning is
/// cheap: the configuration and dispatcher are shared.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry used by the HTTP transport.
    #[cfg(feature = "http")]
    registry: ToolRegistry,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to Voicebox through `client`.
    pub fn new(config: Config, client: Arc<dyn CloudClient>) -> Self {
        let dispatcher = ToolDispatcher::new(client, config.credentials.clone());
        Self::with_dispatcher(config, dispatcher)
    }

    /// Create a server around an already configured dispatcher.
    pub fn with_dispatcher(config: Config, dispatcher: ToolDispatcher) -> Self {
        Self {
            config: Arc::new(config),
            #[cfg(feature = "http")]
            registry: ToolRegistry::new(dispatcher.clone()),
            tool_router: build_tool_router::<Self>(dispatcher),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "title": t.title,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                    "annotations": t.annotations
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// `headers` are the headers of the HTTP request carrying the call; they
    /// take precedence over the configured credentials.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
        headers: &RequestHeaders,
    ) -> Result<serde_json::Value, ToolError> {
        self.registry.call_tool(name, arguments, headers).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::voicebox::fake::{FakeCall, FakeCloudClient};

    fn test_server() -> McpServer {
        McpServer::new(Config::default(), Arc::new(FakeCloudClient::new()))
    }

    #[test]
    fn test_server_info() {
        let server = test_server();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(info.server_info.name, "voicebox-mcp-server");
    }

    #[test]
    fn test_list_tools() {
        let tools = test_server().list_tools();
        assert_eq!(tools.len(), 3);
        assert!(tools.iter().all(|t| t["annotations"]["readOnlyHint"] == true));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_call_tool_missing_token() {
        let err = test_server()
            .call_tool("voicebox_settings", serde_json::json!({}), &RequestHeaders::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "API token is required");
    }

    #[tokio::test]
    async fn test_tool_call_through_rmcp_service() {
        use rmcp::ServiceExt;
        use rmcp::service::ServiceError;

        let client = FakeCloudClient::new();
        let mut config = Config::default();
        config.credentials.api_token = Some("arg-token".to_string());
        let server = McpServer::new(config, Arc::new(client.clone()));

        let (server_io, client_io) = tokio::io::duplex(64 * 1024);
        tokio::spawn(async move {
            let running = server.serve(server_io).await.unwrap();
            let _ = running.waiting().await;
        });
        let peer = ClientInfo::default().serve(client_io).await.unwrap();

        let tools = peer.list_all_tools().await.unwrap();
        assert_eq!(tools.len(), 3);

        let request = serde_json::from_value(serde_json::json!({
            "name": "voicebox_ask",
            "arguments": { "question": "What is the flight plan?" }
        }))
        .unwrap();
        let result = peer.call_tool(request).await.unwrap();
        let result = serde_json::to_value(&result).unwrap();
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("Test answer"));
        assert_eq!(
            client.calls()[0],
            FakeCall::Open {
                api_token: "arg-token".to_string(),
                client_id: Some("VBX-APP".to_string()),
            }
        );

        let request = serde_json::from_value(serde_json::json!({
            "name": "voicebox_ask",
            "arguments": { "question": "" }
        }))
        .unwrap();
        match peer.call_tool(request).await.unwrap_err() {
            ServiceError::McpError(err) => {
                assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
                assert_eq!(err.message, "A valid question is required to execute the tool");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        peer.cancel().await.unwrap();
    }
}
