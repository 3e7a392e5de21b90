//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use rmcp::model::Tool;

#[cfg(feature = "http")]
use tracing::warn;

#[cfg(feature = "http")]
use crate::core::headers::RequestHeaders;

use super::definitions::{VoiceboxAskTool, VoiceboxGenerateQueryTool, VoiceboxSettingsTool};
use super::dispatcher::ToolDispatcher;
#[cfg(feature = "http")]
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
#[derive(Clone)]
pub struct ToolRegistry {
    dispatcher: ToolDispatcher,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            VoiceboxSettingsTool::NAME,
            VoiceboxAskTool::NAME,
            VoiceboxGenerateQueryTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both HTTP and STDIO transports list tools from here.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            VoiceboxSettingsTool::to_tool(),
            VoiceboxAskTool::to_tool(),
            VoiceboxGenerateQueryTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// `headers` are the headers of the HTTP request carrying the call.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
        headers: &RequestHeaders,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            VoiceboxSettingsTool::NAME => {
                VoiceboxSettingsTool::http_handler(arguments, headers, &self.dispatcher).await
            }
            VoiceboxAskTool::NAME => {
                VoiceboxAskTool::http_handler(arguments, headers, &self.dispatcher).await
            }
            VoiceboxGenerateQueryTool::NAME => {
                VoiceboxGenerateQueryTool::http_handler(arguments, headers, &self.dispatcher).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CredentialsConfig;
    use crate::domains::voicebox::fake::FakeCloudClient;
    use std::sync::Arc;

    fn test_registry() -> ToolRegistry {
        let defaults = CredentialsConfig {
            api_token: Some("arg-token".to_string()),
            client_id: Some("test-client".to_string()),
            auth_token_override: None,
        };
        ToolRegistry::new(ToolDispatcher::new(Arc::new(FakeCloudClient::new()), defaults))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = test_registry().tool_names();
        assert_eq!(
            names,
            vec!["voicebox_settings", "voicebox_ask", "voicebox_generate_query"]
        );
    }

    #[test]
    fn test_all_tools_read_only() {
        for tool in ToolRegistry::get_all_tools() {
            let hint = tool.annotations.as_ref().and_then(|a| a.read_only_hint);
            assert_eq!(hint, Some(true), "{} should be read-only", tool.name);
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_ask() {
        let result = test_registry()
            .call_tool(
                "voicebox_ask",
                serde_json::json!({ "question": "What is the flight plan?" }),
                &RequestHeaders::new(),
            )
            .await
            .unwrap();
        assert_eq!(result["isError"], false);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("Test answer"));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let err = test_registry()
            .call_tool("unknown", serde_json::json!({}), &RequestHeaders::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }
}
