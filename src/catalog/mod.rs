//! Catalog subsystem.
//!
//! # Data Flow
//! ```text
//! static:      demo.rs → filter_active → Flat
//! synced:      GET /store/products
//!                  → GET /store/products/{id} (concurrently, order kept)
//!                  → mapper.rs → filter_active → Flat
//! passthrough: GET /products[/{id}] → Raw (verbatim)
//! ```

pub mod demo;
pub mod mapper;
pub mod product;

pub use mapper::{map_sync_product, SyncProductEnvelope, SyncProductSummary};
pub use product::{filter_active, Product};

use futures_util::future::try_join_all;
use serde::Serialize;
use serde_json::Value;

use crate::config::CatalogMode;
use crate::upstream::{Envelope, UpstreamClient, UpstreamError, UpstreamResult};

/// What `/api/products` hands back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProductListing {
    /// Flat product schema (static and synced modes).
    Flat(Vec<Product>),
    /// Upstream payload, untouched.
    Raw(Value),
}

/// Produces product listings for the configured mode.
#[derive(Debug, Clone)]
pub struct Catalog {
    mode: CatalogMode,
    upstream: UpstreamClient,
}

impl Catalog {
    pub fn new(mode: CatalogMode, upstream: UpstreamClient) -> Self {
        Self { mode, upstream }
    }

    pub fn mode(&self) -> CatalogMode {
        self.mode
    }

    pub fn upstream_has_credential(&self) -> bool {
        self.upstream.has_credential()
    }

    /// List products. `only_active` is ignored in passthrough mode.
    pub async fn list_products(&self, only_active: bool) -> UpstreamResult<ProductListing> {
        match self.mode {
            CatalogMode::Static => Ok(ProductListing::Flat(filter_active(
                demo::demo_products(),
                only_active,
            ))),
            CatalogMode::Synced => {
                let products = self.synced_products().await?;
                Ok(ProductListing::Flat(filter_active(products, only_active)))
            }
            CatalogMode::Passthrough => self
                .upstream
                .get_json("/products")
                .await
                .map(ProductListing::Raw),
        }
    }

    /// Fetch a single upstream product verbatim.
    pub async fn get_product(&self, product_id: u64) -> UpstreamResult<Value> {
        self.upstream.get_json(&format!("/products/{}", product_id)).await
    }

    async fn synced_products(&self) -> UpstreamResult<Vec<Product>> {
        let listing: Envelope<Vec<SyncProductSummary>> = self.upstream.get("/store/products").await?;

        let ids: Vec<u64> = listing
            .result
            .iter()
            .filter_map(|summary| {
                if summary.id.is_none() {
                    tracing::warn!(name = ?summary.name, "Skipping sync product without id");
                }
                summary.id
            })
            .collect();

        tracing::debug!(count = ids.len(), "Fetching sync product details");

        let details = try_join_all(ids.into_iter().map(|id| {
            let upstream = &self.upstream;
            async move {
                let detail: Envelope<SyncProductEnvelope> =
                    upstream.get(&format!("/store/products/{}", id)).await?;
                Ok::<_, UpstreamError>(detail.result)
            }
        }))
        .await?;

        Ok(details.iter().map(map_sync_product).collect())
    }
}
