//! Common pieces shared by the Voicebox tools.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::Deserialize;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters of the question-based tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct VoiceboxQuestionParams {
    /// The natural language question.
    #[schemars(description = "The question to send to Voicebox")]
    pub question: String,

    /// Conversation to continue, as returned by a previous answer.
    #[schemars(description = "Conversation ID from a previous answer (optional)")]
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// The settings tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct VoiceboxSettingsParams {}

/// Annotations shared by all Voicebox tools: they only read data.
pub fn read_only_annotations(title: &str) -> ToolAnnotations {
    ToolAnnotations {
        title: Some(title.to_string()),
        read_only_hint: Some(true),
        destructive_hint: None,
        idempotent_hint: None,
        open_world_hint: None,
    }
}

/// Wrap tool text in a successful result.
pub fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

/// Parse rmcp call arguments into question parameters.
pub fn question_params_from_object(
    args: serde_json::Map<String, serde_json::Value>,
) -> Result<VoiceboxQuestionParams, McpError> {
    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Parse HTTP call arguments into question parameters.
#[cfg(feature = "http")]
pub fn question_params_from_json(
    arguments: &serde_json::Value,
) -> Result<VoiceboxQuestionParams, ToolError> {
    let question = arguments
        .get("question")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolError::invalid_arguments("Missing or invalid 'question' parameter"))?
        .to_string();

    // Absent and null both mean a new conversation
    let conversation_id = match arguments.get("conversation_id") {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(id)) => Some(id.clone()),
        Some(_) => {
            return Err(ToolError::invalid_arguments(
                "Invalid 'conversation_id' parameter",
            ));
        }
    };

    Ok(VoiceboxQuestionParams {
        question,
        conversation_id,
    })
}

/// JSON body returned by the HTTP transport for a tool result.
#[cfg(feature = "http")]
pub fn http_result(text: String) -> serde_json::Value {
    let result = text_result(text);
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}
