//! Router-level checks of CORS and request IDs, without a network listener.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use storefront_proxy::config::{CatalogMode, ProxyConfig};
use storefront_proxy::HttpServer;
use tower::ServiceExt;

fn router() -> axum::Router {
    let mut config = ProxyConfig::default();
    config.catalog.mode = CatalogMode::Static;
    config.upstream.use_env_proxy = false;
    HttpServer::new(config, None).unwrap().router()
}

#[tokio::test]
async fn test_allowed_origin_is_echoed_with_credentials() {
    for origin in ["https://galacticarchives.space", "http://localhost:3000", "http://127.0.0.1:3000"] {
        let res = router()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], origin);
        assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    }
}

#[tokio::test]
async fn test_unknown_origin_gets_no_cors_headers() {
    let res = router()
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .header(header::ORIGIN, "https://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_preflight_mirrors_method_and_headers() {
    let res = router()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/products")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom-header")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://localhost:3000");
    assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_METHODS], "DELETE");
    assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS], "x-custom-header");
}

#[tokio::test]
async fn test_request_id_generated_and_propagated() {
    let res = router()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let id = res.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());

    let res = router()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header("x-request-id", "client-chosen-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "client-chosen-id");
}

#[tokio::test]
async fn test_unknown_route_uses_error_envelope() {
    let res = router()
        .oneshot(Request::builder().uri("/api/orders").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({"detail": "Not Found"}));
}
