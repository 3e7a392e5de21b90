//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during tool operations.
///
/// `MissingParameter` and `InvalidArguments` are caller or configuration
/// mistakes. `Execution` wraps a failure of the Voicebox API and is only
/// built by the dispatcher.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A required parameter resolved to nothing.
    #[error("{0}")]
    MissingParameter(String),

    /// Invalid arguments were provided to the tool.
    #[error("{0}")]
    InvalidArguments(String),

    /// The Voicebox API call failed.
    #[error("Error executing tool: {tool} - {message}")]
    Execution { tool: String, message: String },
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "missing parameter" error.
    pub fn missing_parameter(msg: impl Into<String>) -> Self {
        Self::MissingParameter(msg.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Wrap an external failure for `tool`.
    pub fn execution(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Execution {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Name of the tool whose execution failed, if this is an execution error.
    pub fn tool_name(&self) -> Option<&str> {
        match self {
            Self::Execution { tool, .. } => Some(tool),
            _ => None,
        }
    }

    /// Whether this error was caused by the caller's input or configuration.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::MissingParameter(_) | Self::InvalidArguments(_)
        )
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match &err {
            ToolError::Execution { tool, .. } => {
                let data = serde_json::json!({ "tool": tool });
                McpError::internal_error(err.to_string(), Some(data))
            }
            _ => McpError::invalid_params(err.to_string(), None),
        }
    }
}
