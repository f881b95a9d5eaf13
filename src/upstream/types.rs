//! Upstream error taxonomy.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// No bearer credential was configured; nothing was sent.
    #[error("Printful API key not configured")]
    MissingCredential,

    /// Upstream answered with a non-success status.
    #[error("Upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// DNS, connect, timeout or body read failure.
    #[error("Upstream transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream body was not the JSON we expected.
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

impl UpstreamError {
    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::MissingCredential => "missing_credential",
            UpstreamError::Status { .. } => "status",
            UpstreamError::Transport(_) => "transport",
            UpstreamError::MalformedResponse(_) => "malformed",
        }
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Printful wraps every payload as `{"code": .., "result": ..}`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub code: Option<u16>,
    pub result: T,
}
