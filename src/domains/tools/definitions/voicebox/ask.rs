//! Voicebox ask tool.
//!
//! Sends a natural language question to Voicebox and returns its answer.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::Tool,
};

use crate::core::headers::RequestHeaders;
use crate::domains::tools::dispatcher::{ASK_TOOL, ToolDispatcher};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

use super::common::{
    VoiceboxQuestionParams, question_params_from_object, read_only_annotations, text_result,
};

/// Voicebox ask tool.
pub struct VoiceboxAskTool;

impl VoiceboxAskTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = ASK_TOOL;

    pub const TITLE: &'static str = "Voicebox: Ask Questions";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Ask a question to Voicebox and get a natural language response";

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    #[tracing::instrument(skip_all)]
    pub async fn http_handler(
        arguments: serde_json::Value,
        headers: &RequestHeaders,
        dispatcher: &ToolDispatcher,
    ) -> Result<serde_json::Value, ToolError> {
        let params = super::common::question_params_from_json(&arguments)?;
        let text = dispatcher
            .ask(headers, &params.question, params.conversation_id.as_deref())
            .await?;
        Ok(super::common::http_result(text))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<VoiceboxQuestionParams>(),
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
            let args = ctx.arguments.clone().unwrap_or_default();
            let headers = RequestHeaders::from_extensions(&ctx.request_context.extensions);
            let dispatcher = dispatcher.clone();
            async move {
                let params = question_params_from_object(args)?;
                let text = dispatcher
                    .ask(&headers, &params.question, params.conversation_id.as_deref())
                    .await?;
                Ok(text_result(text))
            }
            .boxed()
        })
    }
}
