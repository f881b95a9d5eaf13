//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast on bad configuration; a missing credential is not fatal and
//!   surfaces as a 500 on each upstream-backed request instead
//! - The credential is read exactly once, here

use crate::config::ProxyConfig;
use crate::http::HttpServer;
use crate::upstream::UpstreamResult;

/// Read the upstream credential from the named environment variable.
pub fn read_api_key(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

/// Build the HTTP server from a validated configuration.
pub fn build_server(config: ProxyConfig) -> UpstreamResult<HttpServer> {
    let api_key = read_api_key(&config.upstream.api_key_env);

    if api_key.is_none() && config.catalog.mode.needs_upstream() {
        tracing::warn!(
            env = %config.upstream.api_key_env,
            mode = %config.catalog.mode,
            "Upstream credential not set; product endpoints will return 500"
        );
    }

    HttpServer::new(config, api_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variable_reads_as_none() {
        assert_eq!(read_api_key("STOREFRONT_PROXY_TEST_SURELY_UNSET_VAR"), None);
    }

    #[test]
    fn test_build_server_without_credential() {
        let mut config = ProxyConfig::default();
        config.upstream.api_key_env = "STOREFRONT_PROXY_TEST_SURELY_UNSET_VAR".into();
        let server = build_server(config).unwrap();
        assert!(!server.state().catalog.upstream_has_credential());
    }
}
