//! Sync product → flat product mapping.
//!
//! A sync product may have many variants (sizes, colours). Only the first
//! variant's price and currency are used; the rest are ignored.

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::catalog::product::{Product, DEFAULT_CURRENCY};

/// Category assigned to every synced product.
pub const SYNCED_CATEGORY: &str = "Printful";

/// One entry of `GET /store/products`.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncProductSummary {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// `result` of `GET /store/products/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncProductEnvelope {
    #[serde(default)]
    pub sync_product: SyncProduct,
    #[serde(default)]
    pub sync_variants: Vec<SyncVariant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncProduct {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncVariant {
    /// Decimal string upstream ("9.99"); numbers are tolerated.
    #[serde(default)]
    pub retail_price: Option<Value>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Map one sync product envelope into the flat schema.
pub fn map_sync_product(envelope: &SyncProductEnvelope) -> Product {
    let product = &envelope.sync_product;
    let id = stringify_id(product.id.as_ref());
    let name = product.name.clone().unwrap_or_default();

    let (price, currency) = match envelope.sync_variants.first() {
        Some(variant) => (
            parse_price(&id, variant.retail_price.as_ref()),
            variant
                .currency
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        ),
        None => (0.0, DEFAULT_CURRENCY.to_string()),
    };

    Product {
        external_id: Some(id.clone()),
        id,
        description: Some(name.clone()),
        name,
        image_url: product
            .thumbnail_url
            .as_deref()
            .and_then(|u| Url::parse(u).ok()),
        price,
        currency,
        category: Some(SYNCED_CATEGORY.to_string()),
        is_active: true,
    }
}

/// Missing ids become the literal "None".
fn stringify_id(id: Option<&Value>) -> String {
    match id {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn parse_price(id: &str, raw: Option<&Value>) -> f64 {
    let parsed = match raw {
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    };
    parsed.unwrap_or_else(|| {
        tracing::warn!(product_id = %id, retail_price = ?raw, "Unparsable variant price, using 0.0");
        0.0
    })
}
