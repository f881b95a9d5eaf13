//! Error envelope returned to the frontend.
//!
//! Every failure becomes `{"detail": "<message>"}`. Upstream-reported errors
//! keep the upstream status; everything else is a 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::upstream::UpstreamError;

pub const DETAIL_TRANSPORT: &str = "Failed to reach Printful API";
pub const DETAIL_MALFORMED: &str = "Invalid response from Printful API";

/// An error on its way to becoming an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Request validation failure (bad path or query parameter).
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found")
    }

    pub fn request_timeout() -> Self {
        Self::new(StatusCode::REQUEST_TIMEOUT, "Request timed out")
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::MissingCredential => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, UpstreamError::MissingCredential.to_string())
            }
            UpstreamError::Status { status, body } => {
                let status = if status.is_client_error() || status.is_server_error() {
                    status
                } else {
                    StatusCode::BAD_GATEWAY
                };
                Self::new(status, body)
            }
            UpstreamError::Transport(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, DETAIL_TRANSPORT)
            }
            UpstreamError::MalformedResponse(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, DETAIL_MALFORMED)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
