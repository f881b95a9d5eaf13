//! Printful REST client with timeout and error handling.
//!
//! # Responsibilities
//! - Attach bearer credential and JSON content type to every call
//! - Enforce the configured request and connect timeouts
//! - Classify failures (credential, status, transport, malformed body)

use std::time::{Duration, Instant};

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::types::{UpstreamError, UpstreamResult};

/// HTTP client wrapper for the upstream fulfillment API.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    bearer: Option<HeaderValue>,
    timeout: Duration,
}

impl UpstreamClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `config` - Upstream configuration
    /// * `api_key` - Bearer credential, if one was provided at startup
    pub fn new(config: &UpstreamConfig, api_key: Option<String>) -> UpstreamResult<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let mut builder = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs));
        if !config.use_env_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(UpstreamError::Transport)?;

        let bearer = api_key
            .filter(|k| !k.trim().is_empty())
            .and_then(|k| match HeaderValue::from_str(&format!("Bearer {}", k.trim())) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    Some(value)
                }
                Err(_) => {
                    tracing::warn!("Upstream credential contains invalid header characters, ignoring it");
                    None
                }
            });

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer,
            timeout,
        })
    }

    /// Whether a credential is available for upstream calls.
    pub fn has_credential(&self) -> bool {
        self.bearer.is_some()
    }

    /// Fetch `path` and decode it into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> UpstreamResult<T> {
        let (body, start) = self.fetch(path).await?;
        match serde_json::from_str(&body) {
            Ok(value) => {
                metrics::record_upstream_call("success", start);
                Ok(value)
            }
            Err(e) => {
                tracing::error!(path = %path, error = %e, "Upstream returned unexpected JSON");
                let err = UpstreamError::MalformedResponse(e);
                metrics::record_upstream_call(err.kind(), start);
                Err(err)
            }
        }
    }

    /// Fetch `path` as untyped JSON.
    pub async fn get_json(&self, path: &str) -> UpstreamResult<Value> {
        self.get::<Value>(path).await
    }

    /// Issue the GET and return the body text of a 2xx response with its start time.
    ///
    /// Failures are recorded here; a 2xx is recorded by the caller once decoded.
    async fn fetch(&self, path: &str) -> UpstreamResult<(String, Instant)> {
        let bearer = match &self.bearer {
            Some(value) => value.clone(),
            None => {
                tracing::error!(path = %path, "Upstream credential missing, refusing call");
                metrics::record_upstream_outcome(UpstreamError::MissingCredential.kind());
                return Err(UpstreamError::MissingCredential);
            }
        };

        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!(url = %url, "Calling upstream");
        let start = Instant::now();

        let result = self
            .client
            .get(&url)
            .header(AUTHORIZATION, bearer)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                if e.is_timeout() {
                    tracing::error!(url = %url, timeout = ?self.timeout, "Upstream request timed out");
                } else {
                    tracing::error!(url = %url, error = %e, "Upstream request failed");
                }
                metrics::record_upstream_call("transport", start);
                return Err(UpstreamError::Transport(e));
            }
        };

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Failed to read upstream body");
            metrics::record_upstream_call("transport", start);
            UpstreamError::Transport(e)
        })?;

        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Upstream returned error status");
            metrics::record_upstream_call("status", start);
            return Err(UpstreamError::Status { status, body });
        }

        Ok((body, start))
    }
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("base_url", &self.base_url)
            .field("has_credential", &self.bearer.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}
