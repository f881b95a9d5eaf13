//! Compiled-in demo catalog so the storefront always has something to show.

use url::Url;

use crate::catalog::product::{Product, DEFAULT_CURRENCY};

struct DemoEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    image_url: &'static str,
    price: f64,
    category: &'static str,
    external_id: &'static str,
}

const DEMO_ENTRIES: [DemoEntry; 3] = [
    DemoEntry {
        id: "prod_001",
        name: "Holographic Stickers",
        description: "A set of shimmering space-themed holographic stickers.",
        image_url: "https://files.cdn.printful.com/path/to/holographic_stickers.png",
        price: 4.99,
        category: "Stickers",
        external_id: "printful_123",
    },
    DemoEntry {
        id: "prod_002",
        name: "Galactic Archives T-Shirt",
        description: "Soft cotton t-shirt with the Galactic Archives emblem.",
        image_url: "https://files.cdn.printful.com/path/to/galactic_archives_tshirt.png",
        price: 18.50,
        category: "Apparel",
        external_id: "printful_456",
    },
    DemoEntry {
        id: "prod_003",
        name: "Mission Patch",
        description: "Embroidered mission patch for your flight suit or backpack.",
        image_url: "https://files.cdn.printful.com/path/to/mission_patch.png",
        price: 6.75,
        category: "Accessories",
        external_id: "printful_789",
    },
];

/// Build the demo products.
pub fn demo_products() -> Vec<Product> {
    DEMO_ENTRIES
        .iter()
        .map(|entry| Product {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            description: Some(entry.description.to_string()),
            image_url: Url::parse(entry.image_url).ok(),
            price: entry.price,
            currency: DEFAULT_CURRENCY.to_string(),
            category: Some(entry.category.to_string()),
            is_active: true,
            external_id: Some(entry.external_id.to_string()),
        })
        .collect()
}
