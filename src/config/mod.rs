//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI overrides (main.rs)
//!     → ProxyConfig (validated, immutable)
//!     → shared via Arc to the HTTP layer and upstream client
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload
//! - All fields have defaults to allow minimal configs
//! - The upstream credential is read from the environment, never from the file

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    CatalogConfig, CatalogMode, ListenerConfig, ObservabilityConfig, ProxyConfig, ServiceConfig,
    UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};
