//! Inbound request deadline.
//!
//! Requests that outlive `listener.request_timeout_secs` are dropped and
//! answered with the usual `{"detail"}` envelope.

use std::time::Duration;

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::response::ApiError;

pub async fn request_deadline(
    State(limit): State<Duration>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let uri = request.uri().clone();
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(uri = %uri, timeout = ?limit, "Inbound request timed out");
            ApiError::request_timeout().into_response()
        }
    }
}
