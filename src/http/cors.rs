//! Cross-origin policy for the storefront frontend.
//!
//! Only the origins below may read responses. Methods and headers are
//! mirrored from the preflight, so everything is allowed, and credentials
//! are permitted.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Production site plus local development servers.
pub const ALLOWED_ORIGINS: [&str; 3] = [
    "https://galacticarchives.space",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(ALLOWED_ORIGINS.map(HeaderValue::from_static)))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
