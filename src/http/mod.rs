//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID) → cors.rs (origin allow-list)
//!     → timeout.rs (inbound deadline)
//!     → handlers.rs (health, products)
//!     → catalog / upstream
//!     → response.rs (error envelope)
//!     → Send to client
//! ```

pub mod cors;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;
pub mod timeout;

pub use request::{request_id_of, MakeRequestUuidV4, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
