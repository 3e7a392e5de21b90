//! Voicebox client error types.

use thiserror::Error;

/// Result type for Voicebox API calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by the Voicebox API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Voicebox API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON document.
    #[error("Invalid Voicebox response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Any other failure reported by a client implementation.
    #[error("{0}")]
    Api(String),
}

impl ClientError {
    /// Create a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a generic API error.
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }
}
