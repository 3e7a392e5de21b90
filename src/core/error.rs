//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies, providing consistent error handling
//! across the entire application.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
///
/// This enum captures all possible error conditions that can occur during
/// server operation, including domain-specific errors and external failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error from the Voicebox API client.
    #[error("Voicebox client error: {0}")]
    Client(#[from] crate::domains::voicebox::ClientError),

    /// Error from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// I/O errors from file operations or network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolError;
    use crate::domains::voicebox::ClientError;

    #[test]
    fn test_domain_errors_convert() {
        let err: Error = ToolError::missing_parameter("API token is required").into();
        assert!(err.to_string().contains("API token is required"));

        let err: Error = ClientError::status(401, "unauthorized").into();
        assert!(matches!(err, Error::Client(_)));
    }
}
