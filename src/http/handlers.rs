//! Route handlers.

use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::catalog::ProductListing;
use crate::config::CatalogMode;
use crate::http::response::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub only_active: Option<String>,
}

/// `GET /api/health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /`
pub async fn root(State(state): State<AppState>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "online",
        service: state.config.service.name.clone(),
        message: state.config.service.message.clone(),
    })
}

/// `GET /api/products?only_active=<bool>`
pub async fn list_products(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<ProductListing>, ApiError> {
    // passthrough forwards /products as-is and has no filter to parse
    let only_active = if state.catalog.mode() == CatalogMode::Passthrough {
        true
    } else {
        let Query(params) = params.map_err(|e| ApiError::unprocessable(e.body_text()))?;
        match params.only_active.as_deref() {
            None => true,
            Some(raw) => parse_flag(raw)
                .ok_or_else(|| ApiError::unprocessable("only_active must be a boolean"))?,
        }
    };

    tracing::debug!(mode = %state.catalog.mode(), only_active, "Listing products");

    let listing = state.catalog.list_products(only_active).await?;
    Ok(Json(listing))
}

/// `GET /api/products/{product_id}` (passthrough mode only)
pub async fn get_product(
    State(state): State<AppState>,
    product_id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let product_id = match product_id {
        Ok(Path(id)) if id > 0 => id,
        _ => return Err(ApiError::unprocessable("product_id must be a positive integer")),
    };

    let product = state.catalog.get_product(product_id).await?;
    Ok(Json(product))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

/// Lenient boolean query flag: true/false, t/f, 1/0, yes/no, y/n, on/off.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" | "on" => Some(true),
        "false" | "f" | "0" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
