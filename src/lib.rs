//! Storefront proxy library.
//!
//! Thin HTTP facade in front of the Printful fulfillment API: adds the bearer
//! credential, reshapes (or passes through) product data and applies the
//! storefront's CORS policy.

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
