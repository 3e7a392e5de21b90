//! Voicebox SPARQL generation tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::Tool,
};

use crate::core::headers::RequestHeaders;
use crate::domains::tools::dispatcher::{GENERATE_QUERY_TOOL, ToolDispatcher};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

use super::common::{
    VoiceboxQuestionParams, question_params_from_object, read_only_annotations, text_result,
};

/// Voicebox generate-query tool.
pub struct VoiceboxGenerateQueryTool;

impl VoiceboxGenerateQueryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = GENERATE_QUERY_TOOL;

    pub const TITLE: &'static str = "Voicebox: Generate SPARQL";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Generate a SPARQL query from a natural language question using Voicebox";

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        headers: &RequestHeaders,
        dispatcher: &ToolDispatcher,
    ) -> Result<serde_json::Value, ToolError> {
        let params = super::common::question_params_from_json(&arguments)?;
        let text = dispatcher
            .generate_query(headers, &params.question, params.conversation_id.as_deref())
            .await?;
        Ok(super::common::http_result(text))
    }

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
                    .generate_query(&headers, &params.question, params.conversation_id.as_deref())
                    .await?;
                Ok(text_result(text))
            }
            .boxed()
        })
    }
}
