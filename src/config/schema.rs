//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the storefront proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address, inbound timeout).
    pub listener: ListenerConfig,

    /// Upstream fulfillment API settings.
    pub upstream: UpstreamConfig,

    /// Which catalog surface the proxy serves.
    pub catalog: CatalogConfig,

    /// Identity reported by the root liveness endpoint.
    pub service: ServiceConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,

    /// Inbound request timeout in seconds. Must exceed the upstream timeout.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            request_timeout_secs: 60,
        }
    }
}

/// Upstream (Printful) API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL every upstream path is appended to.
    pub base_url: String,

    /// Total request timeout in seconds.
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Name of the environment variable holding the bearer credential.
    pub api_key_env: String,

    /// Honour HTTP(S)_PROXY environment variables for outbound calls.
    pub use_env_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.printful.com".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            api_key_env: "PRINTFUL_API_KEY".to_string(),
            use_env_proxy: true,
        }
    }
}

/// Catalog surface selection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub mode: CatalogMode,
}

/// How `/api/products` is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogMode {
    /// Compiled-in demo products; no upstream calls.
    Static,
    /// Upstream sync products mapped into the flat product schema.
    Synced,
    /// Upstream product JSON returned verbatim.
    #[default]
    Passthrough,
}

impl CatalogMode {
    /// Whether this mode talks to the upstream API at all.
    pub fn needs_upstream(self) -> bool {
        !matches!(self, CatalogMode::Static)
    }
}

impl std::fmt::Display for CatalogMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CatalogMode::Static => "static",
            CatalogMode::Synced => "synced",
            CatalogMode::Passthrough => "passthrough",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for CatalogMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(CatalogMode::Static),
            "synced" => Ok(CatalogMode::Synced),
            "passthrough" => Ok(CatalogMode::Passthrough),
            other => Err(format!(
                "unknown catalog mode '{}' (expected static, synced or passthrough)",
                other
            )),
        }
    }
}

/// Service identity for `GET /`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub message: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "Galactic Archives Store API".to_string(),
            message: "Printful proxy is running".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
