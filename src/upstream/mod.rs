//! Upstream integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment variable (bearer credential, read once at startup)
//!     → client.rs (authenticated GET with timeouts)
//!     → types.rs (status / transport / malformed classification)
//!     → catalog (mapping or pass-through)
//! ```
//!
//! # Security Constraints
//! - Credential ONLY from the environment
//! - Never log the credential; the Authorization header is marked sensitive
//! - Missing credential fails before any request is built

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{Envelope, UpstreamError, UpstreamResult};
