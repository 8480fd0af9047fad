// Error types for console client operations

use serde_json::Value;

/// Errors surfaced by console API operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Terminal non-OK HTTP response. `message` is the server's
    /// `detail` field when the error body carried one.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Query serialization error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl ClientError {
    /// HTTP status of a terminal API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure is transient (network-level or 5xx) and a
    /// retry could succeed. 4xx and decode failures are permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Api { status, .. } => *status >= 500,
            ClientError::Http(_) => true,
            _ => false,
        }
    }
}
