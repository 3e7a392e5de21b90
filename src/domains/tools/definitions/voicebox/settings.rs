//! Voicebox settings tool.
//!
//! Returns the settings of the Voicebox application owning the resolved
//! API token.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::Tool,
};

use crate::core::headers::RequestHeaders;
use crate::domains::tools::dispatcher::{SETTINGS_TOOL, ToolDispatcher};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

use super::common::{VoiceboxSettingsParams, read_only_annotations, text_result};

/// Voicebox settings tool.
pub struct VoiceboxSettingsTool;

impl VoiceboxSettingsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = SETTINGS_TOOL;

    pub const TITLE: &'static str = "Voicebox: Settings";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the settings for a Voicebox application in Stardog Cloud";

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        _arguments: serde_json::Value,
        headers: &RequestHeaders,
        dispatcher: &ToolDispatcher,
    ) -> Result<serde_json::Value, ToolError> {
        let text = dispatcher.settings(headers).await?;
        Ok(super::common::http_result(text))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<VoiceboxSettingsParams>(),
            annotations: Some(read_only_annotations(Self::TITLE)),
            output_schema: None,
            icons: None,
            meta: None,
            title: Some(Self::TITLE.into()),
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(dispatcher: ToolDispatcher) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let headers = RequestHeaders::from_extensions(&ctx.request_context.extensions);
            let dispatcher = dispatcher.clone();
            async move {
                let text = dispatcher.settings(&headers).await?;
                Ok(text_result(text))
            }
            .boxed()
        })
    }
}
