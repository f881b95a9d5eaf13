//! Flat product schema served to the storefront.

use serde::{Deserialize, Serialize};
use url::Url;

/// Currency used when nothing better is known.
pub const DEFAULT_CURRENCY: &str = "GBP";

/// UI-facing product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<Url>,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Upstream provider id this product was built from.
    #[serde(default)]
    pub external_id: Option<String>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_active() -> bool {
    true
}

/// Keep only active products when `only_active` is set.
pub fn filter_active(products: Vec<Product>, only_active: bool) -> Vec<Product> {
    if only_active {
        products.into_iter().filter(|p| p.is_active).collect()
    } else {
        products
    }
}
